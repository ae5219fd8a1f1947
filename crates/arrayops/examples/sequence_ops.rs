//! Sequence Operations Examples
//!
//! This example walks through each operation in the crate:
//! - Predicate scans (every / some / find)
//! - Depth-bounded flattening of nested sequences
//! - Generative construction
//! - Grouping by computed keys
//! - In-place bubble sort
//!
//! Each scenario prints its inputs and results.

#[cfg(feature = "std")]
use arrayops::prelude::*;

#[cfg(feature = "std")]
fn main() {
    println!("{}", "=".repeat(72));
    println!("arrayops - Sequence Operations Examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_predicate_scans();
    example_2_flattening();
    example_3_generation();
    example_4_grouping();
    example_5_bubble_sort();
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Predicate Scans
/// Short-circuiting membership tests and first-match search.
fn example_1_predicate_scans() {
    println!("Example 1: Predicate Scans");
    println!("{}", "-".repeat(72));

    let numbers = [4, 8, 15, 16, 23, 42];
    println!("numbers            = {numbers:?}");
    println!("every <= 42        = {}", every(&numbers, |n, _| *n <= 42));
    println!("every even         = {}", every(&numbers, |n, _| n % 2 == 0));
    println!("some odd           = {}", some(&numbers, |n, _| n % 2 != 0));
    println!("find > 16          = {:?}", find(&numbers, |n, _| *n > 16));
    println!("find > 100         = {:?}", find(&numbers, |n, _| *n > 100));
    println!();
}

#[cfg(feature = "std")]
/// Example 2: Flattening
/// Bounded and unbounded expansion of nested sequences.
fn example_2_flattening() {
    println!("Example 2: Flattening");
    println!("{}", "-".repeat(72));

    let values = arrayops::nested![4, [8, [15, [16]]], 23, 42];
    println!("input              = {values:?}");
    println!("depth 1            = {:?}", flatten(&values, Depth::Levels(1)));
    println!("depth 2            = {:?}", flatten(&values, Depth::Levels(2)));
    println!("unbounded          = {:?}", flatten(&values, Depth::Unbounded));
    println!("flatten_deep       = {:?}", flatten_deep(&values));
    println!();
}

#[cfg(feature = "std")]
/// Example 3: Generation
/// Building sequences from an index-driven generator.
fn example_3_generation() {
    println!("Example 3: Generation");
    println!("{}", "-".repeat(72));

    println!("from_fn(5, i+1)    = {:?}", from_fn(5, |i| i + 1));
    println!("from_fn(4, i*i)    = {:?}", from_fn(4, |i| i * i));
    println!("try_from_len(-1)   = {:?}", try_from_len(-1, |i| i));
    println!();
}

#[cfg(feature = "std")]
/// Example 4: Grouping
/// Bucketing elements by a computed key.
fn example_4_grouping() {
    println!("Example 4: Grouping");
    println!("{}", "-".repeat(72));

    let numbers = [4, 8, 15, 16, 23, 42];
    let groups = group_by(&numbers, |n, _| if n % 2 == 0 { "even" } else { "odd" });
    println!("numbers            = {numbers:?}");
    for (key, bucket) in &groups {
        println!("bucket {key:<12}= {bucket:?}");
    }
    println!();
}

#[cfg(feature = "std")]
/// Example 5: Bubble Sort
/// In-place comparator sort with the two-index scan.
fn example_5_bubble_sort() {
    println!("Example 5: Bubble Sort");
    println!("{}", "-".repeat(72));

    let mut numbers = [4, 8, 15, 16, 23, 42];
    println!("input              = {numbers:?}");
    bubble_sort(&mut numbers, |a, b| b.cmp(a));
    println!("descending         = {numbers:?}");
    println!("re-sorted (copy)   = {:?}", bubble_sorted(&numbers, |a, b| a.cmp(b)));
    println!();
}
