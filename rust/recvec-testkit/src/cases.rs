//! The `RecordVec` conformance suite.
//!
//! Most cases work on vectors of `i32` records created with a capacity hint of
//! 25 and end by checking that the contents are exactly `0, 1, 2, ...`.

use recvec::{RecordVec, Status};

use crate::{
    alloc::{CountingAllocator, FailingAllocator},
    check, check_eq,
    harness::{Case, CaseResult},
};

macro_rules! cases {
    ($($name:ident),* $(,)?) => {
        vec![$(Case { name: stringify!($name), run: $name }),*]
    };
}

/// Returns every conformance case, grouped by operation.
pub fn all() -> Vec<Case> {
    cases![
        new_element_size_zero,
        new_capacity_zero,
        new_element_size_max,
        new_capacity_max,
        new_allocation_failure,
        destroy_absent,
        at_inside,
        at_outside,
        at_empty,
        front_nonempty,
        front_empty,
        back_nonempty,
        back_single,
        back_empty,
        data_nonempty,
        data_empty,
        empty_empty,
        empty_nonempty,
        size_empty,
        size_nonempty,
        element_size,
        reserve_zero,
        reserve_below_size,
        reserve_equals_size,
        reserve_above_size,
        reserve_above_capacity,
        reserve_capacity_max,
        reserve_allocation_failure,
        capacity,
        shrink_to_fit_empty,
        shrink_to_fit_size_equals_capacity,
        shrink_to_fit_size_below_capacity,
        shrink_to_fit_keeps_contents,
        clear_nonempty,
        clear_empty,
        assign_empty_and_nonempty,
        assign_less,
        assign_more,
        assign_no_source,
        assign_growing_capacity,
        assign_count_max,
        assign_round_trip,
        replace_empty_vector,
        replace_empty_range_start,
        replace_empty_range_middle,
        replace_empty_range_end,
        replace_start,
        replace_middle,
        replace_end,
        replace_start_with_nothing,
        replace_middle_with_nothing,
        replace_end_with_nothing,
        replace_with_less,
        replace_with_more,
        replace_all_with_less,
        replace_all_with_more,
        replace_no_source,
        replace_growing_capacity,
        replace_count_max,
        replace_outside_range,
        replace_negative_range,
        replace_source_length_mismatch,
        replace_allocation_failure,
        replace_matches_erase_then_insert,
        insert_empty_vector,
        insert_start,
        insert_middle,
        insert_end,
        insert_nothing,
        insert_no_source,
        insert_growing_capacity,
        insert_count_max,
        insert_outside_range,
        erase_nothing,
        erase_start,
        erase_middle,
        erase_end,
        erase_all,
        erase_outside_range,
        erase_negative_range,
        push_back_empty,
        push_back,
        push_back_growing_capacity,
        push_back_amortized_growth,
        push_back_allocation_failure,
        pop_back,
        pop_back_empty,
        resize_zero_size,
        resize_smaller_size,
        resize_equal_size,
        resize_larger_size,
        resize_larger_capacity,
        resize_size_max,
        copy_empty_to_empty,
        copy_empty_to_nonempty,
        copy_nonempty_to_empty,
        copy_nonempty_to_nonempty,
        copy_element_size_mismatch,
        copy_growing_capacity,
        swap,
        typed_view_size_mismatch,
    ]
}

fn int_vec() -> recvec::Result<RecordVec> {
    RecordVec::for_type::<i32>(25)
}

fn int_vec_with(values: &[i32]) -> recvec::Result<RecordVec> {
    let mut v = int_vec()?;
    v.assign_typed(values)?;
    Ok(v)
}

fn ints(v: &RecordVec<impl recvec::RawAllocator>) -> Vec<i32> {
    v.typed_data::<i32>().map(<[i32]>::to_vec).unwrap_or_default()
}

/// `true` if `v` holds `i32` records `0, 1, ..., len - 1` and is not empty.
fn is_sequential(v: &RecordVec<impl recvec::RawAllocator>) -> bool {
    v.element_size() == std::mem::size_of::<i32>()
        && !v.is_empty()
        && v.typed_data::<i32>()
            .is_ok_and(|d| d.iter().enumerate().all(|(i, &x)| x as usize == i))
}

fn sequence(n: i32) -> Vec<i32> {
    (0..n).collect()
}

// create / destroy

fn new_element_size_zero() -> CaseResult {
    let res = RecordVec::new(0, 1);
    check_eq!(Status::of(&res), Status::InvalidArgument);
    Ok(())
}

fn new_capacity_zero() -> CaseResult {
    let v = RecordVec::new(1, 0)?;
    check!(v.capacity() >= 1);
    check_eq!(v.len(), 0);
    Ok(())
}

fn new_element_size_max() -> CaseResult {
    let res = RecordVec::new(usize::MAX, 0);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    Ok(())
}

fn new_capacity_max() -> CaseResult {
    let res = RecordVec::new(1, usize::MAX);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    Ok(())
}

fn new_allocation_failure() -> CaseResult {
    let alloc = FailingAllocator::armed();
    let res = RecordVec::new_in(4, 25, &alloc);
    check_eq!(Status::of(&res), Status::AllocationFailure);
    Ok(())
}

fn destroy_absent() -> CaseResult {
    let absent: Option<RecordVec> = None;
    drop(absent);

    let alloc = CountingAllocator::new();
    let v = RecordVec::new_in(4, 25, &alloc)?;
    drop(v);
    check_eq!(alloc.deallocations(), 1);
    check_eq!(alloc.live_bytes(), 0);
    Ok(())
}

// accessors

fn at_inside() -> CaseResult {
    let mut v = int_vec()?;
    v.insert(0, None, 5)?;
    let p = v.at(1);
    check!(p.is_some_and(|r| std::ptr::eq(r.as_ptr(), v.as_bytes()[4..].as_ptr())));
    Ok(())
}

fn at_outside() -> CaseResult {
    let mut v = int_vec()?;
    v.insert(0, None, 5)?;
    check!(v.at(6).is_none());
    check!(v.at(5).is_none());
    Ok(())
}

fn at_empty() -> CaseResult {
    let v = int_vec()?;
    check!(v.at(0).is_none());
    Ok(())
}

fn front_nonempty() -> CaseResult {
    let mut v = int_vec()?;
    v.insert(0, None, 5)?;
    check!(v.front().is_some_and(|r| r.as_ptr() == v.as_bytes().as_ptr()));
    Ok(())
}

fn front_empty() -> CaseResult {
    let v = int_vec()?;
    check!(v.front().is_none());
    Ok(())
}

fn back_nonempty() -> CaseResult {
    let mut v = int_vec()?;
    v.insert(0, None, 5)?;
    check!(v.back().is_some_and(|r| r.as_ptr() == v.as_bytes()[16..].as_ptr()));
    Ok(())
}

fn back_single() -> CaseResult {
    let mut v = int_vec()?;
    v.insert(0, None, 1)?;
    check!(v.back().is_some_and(|r| r.as_ptr() == v.as_bytes().as_ptr()));
    Ok(())
}

fn back_empty() -> CaseResult {
    let v = int_vec()?;
    check!(v.back().is_none());
    Ok(())
}

fn data_nonempty() -> CaseResult {
    let mut v = int_vec()?;
    v.insert(0, None, 5)?;
    check!(v.data().is_some_and(|d| d.len() == 5 * 4));
    Ok(())
}

fn data_empty() -> CaseResult {
    let v = int_vec()?;
    check!(v.data().is_none());
    Ok(())
}

fn empty_empty() -> CaseResult {
    let v = RecordVec::new(1, 100)?;
    check!(v.is_empty());
    Ok(())
}

fn empty_nonempty() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.resize(1)?;
    check!(!v.is_empty());
    Ok(())
}

fn size_empty() -> CaseResult {
    let v = RecordVec::new(3, 25)?;
    check_eq!(v.len(), 0);
    Ok(())
}

fn size_nonempty() -> CaseResult {
    let mut v = RecordVec::new(3, 25)?;
    v.resize(10)?;
    check_eq!(v.len(), 10);
    Ok(())
}

fn element_size() -> CaseResult {
    let v = RecordVec::new(3, 25)?;
    check_eq!(v.element_size(), 3);
    Ok(())
}

// capacity

fn reserve_zero() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.reserve(0)?;
    check_eq!(v.capacity(), 100);
    Ok(())
}

fn reserve_below_size() -> CaseResult {
    let mut v = RecordVec::new(1, 120)?;
    v.resize(100)?;
    v.reserve(80)?;
    check_eq!(v.len(), 100);
    check_eq!(v.capacity(), 120);
    Ok(())
}

fn reserve_equals_size() -> CaseResult {
    let mut v = RecordVec::new(1, 120)?;
    v.resize(100)?;
    v.reserve(100)?;
    check_eq!(v.len(), 100);
    check_eq!(v.capacity(), 120);
    Ok(())
}

fn reserve_above_size() -> CaseResult {
    let mut v = RecordVec::new(1, 120)?;
    v.resize(100)?;
    v.reserve(110)?;
    check_eq!(v.len(), 100);
    check_eq!(v.capacity(), 120);
    Ok(())
}

fn reserve_above_capacity() -> CaseResult {
    let mut v = RecordVec::new(1, 120)?;
    v.resize(100)?;
    v.reserve(140)?;
    check_eq!(v.len(), 100);
    check_eq!(v.capacity(), 140);
    Ok(())
}

fn reserve_capacity_max() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.resize(10)?;
    let res = v.reserve(usize::MAX);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 10);
    check_eq!(v.capacity(), 100);
    Ok(())
}

fn reserve_allocation_failure() -> CaseResult {
    let alloc = FailingAllocator::new();
    let mut v = RecordVec::new_in(4, 25, &alloc)?;
    v.assign_typed(&sequence(5))?;
    alloc.arm();
    let res = v.reserve(1000);
    check_eq!(Status::of(&res), Status::AllocationFailure);
    check_eq!(v.capacity(), 25);
    check!(is_sequential(&v));
    check_eq!(v.len(), 5);
    Ok(())
}

fn capacity() -> CaseResult {
    let v = RecordVec::new(3, 25)?;
    check!(v.capacity() >= 25);
    Ok(())
}

fn shrink_to_fit_empty() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.shrink_to_fit()?;
    check!(v.capacity() > 0);
    check!(v.heap_size() >= 64);
    Ok(())
}

fn shrink_to_fit_size_equals_capacity() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.resize(100)?;
    v.shrink_to_fit()?;
    check_eq!(v.len(), v.capacity());
    Ok(())
}

fn shrink_to_fit_size_below_capacity() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.resize(80)?;
    v.shrink_to_fit()?;
    check_eq!(v.len(), v.capacity());
    Ok(())
}

fn shrink_to_fit_keeps_contents() -> CaseResult {
    let mut v = int_vec_with(&sequence(40))?;
    v.erase(20, 40)?;
    v.shrink_to_fit()?;
    check_eq!(v.capacity(), 20);
    check!(is_sequential(&v));
    Ok(())
}

fn clear_nonempty() -> CaseResult {
    let mut v = int_vec()?;
    v.insert(0, None, 5)?;
    v.clear();
    check_eq!(v.len(), 0);
    check_eq!(v.capacity(), 25);
    Ok(())
}

fn clear_empty() -> CaseResult {
    let mut v = int_vec()?;
    v.clear();
    check_eq!(v.len(), 0);
    check_eq!(v.capacity(), 25);
    Ok(())
}

// assign

fn assign_empty_and_nonempty() -> CaseResult {
    let mut v = int_vec()?;
    v.assign(None, 0)?;
    check_eq!(v.capacity(), 25);
    check_eq!(v.len(), 0);

    v.assign_typed(&sequence(5))?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));

    v.assign(None, 0)?;
    check_eq!(v.len(), 0);
    Ok(())
}

fn assign_less() -> CaseResult {
    let mut v = int_vec_with(&[-1; 7])?;
    check_eq!(v.len(), 7);
    v.assign_typed(&sequence(5))?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn assign_more() -> CaseResult {
    let mut v = int_vec_with(&[-1; 3])?;
    check_eq!(v.len(), 3);
    v.assign_typed(&sequence(5))?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn assign_no_source() -> CaseResult {
    let mut v = int_vec()?;
    v.assign(None, 50)?;
    check_eq!(v.len(), 50);
    Ok(())
}

fn assign_growing_capacity() -> CaseResult {
    let mut v = int_vec_with(&[-1; 3])?;
    check_eq!(v.capacity(), 25);
    v.assign_typed(&sequence(50))?;
    check_eq!(v.len(), 50);
    check!(v.capacity() >= 50);
    check!(is_sequential(&v));
    Ok(())
}

fn assign_count_max() -> CaseResult {
    let mut v = int_vec()?;
    let res = v.assign(None, usize::MAX);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 0);
    check_eq!(v.capacity(), 25);
    Ok(())
}

fn assign_round_trip() -> CaseResult {
    let data: Vec<u8> = (0..=255u8).cycle().take(3 * 77).collect();
    let mut v = RecordVec::new(3, 0)?;
    v.assign(Some(&data[..]), 77)?;
    check_eq!(v.data(), Some(&data[..]));
    Ok(())
}

// replace

fn replace_empty_vector() -> CaseResult {
    let mut v = int_vec()?;
    v.replace_typed(0, 0, &sequence(5))?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_empty_range_start() -> CaseResult {
    let mut v = int_vec_with(&[2, 3, 4])?;
    v.replace_typed(0, 0, &[0, 1])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_empty_range_middle() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, 4])?;
    v.replace_typed(2, 2, &[2, 3])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_empty_range_end() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, 2])?;
    v.replace_typed(3, 3, &[3, 4])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_start() -> CaseResult {
    let mut v = int_vec_with(&[-1, -1, 2, 3, 4])?;
    v.replace_typed(0, 2, &[0, 1])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_middle() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, -1, -1, 4])?;
    v.replace_typed(2, 4, &[2, 3])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_end() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, 2, -1, -1])?;
    let len = v.len();
    v.replace_typed(3, len, &[3, 4])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_start_with_nothing() -> CaseResult {
    let mut v = int_vec_with(&[-1, -1, 0, 1, 2, 3, 4])?;
    v.replace(0, 2, None, 0)?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_middle_with_nothing() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, -1, -1, 2, 3, 4])?;
    v.replace(2, 4, None, 0)?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_end_with_nothing() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, 2, 3, 4, -1, -1])?;
    let len = v.len();
    v.replace(len - 2, len, None, 0)?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_with_less() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, -1, -1, -1, 4])?;
    v.replace_typed(2, 5, &[2, 3])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_with_more() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, -1, 4])?;
    v.replace_typed(2, 3, &[2, 3])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_all_with_less() -> CaseResult {
    let mut v = int_vec_with(&[-1; 7])?;
    let len = v.len();
    v.replace_typed(0, len, &sequence(5))?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_all_with_more() -> CaseResult {
    let mut v = int_vec_with(&[-1; 3])?;
    let len = v.len();
    v.replace_typed(0, len, &sequence(5))?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_no_source() -> CaseResult {
    let mut v = int_vec_with(&[-1; 3])?;
    let len = v.len();
    v.replace(0, len, None, 50)?;
    check_eq!(v.len(), 50);
    Ok(())
}

fn replace_growing_capacity() -> CaseResult {
    let mut v = int_vec_with(&[45, 46, 47, 48, 49])?;
    v.replace_typed(0, 0, &sequence(45))?;
    check_eq!(v.len(), 50);
    check!(v.capacity() >= 50);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_count_max() -> CaseResult {
    let mut v = int_vec()?;
    let res = v.replace(0, 0, None, usize::MAX);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 0);

    // representable in records, not in bytes
    let res = v.replace(0, 0, None, usize::MAX / 4 + 1);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 0);
    check_eq!(v.capacity(), 25);
    Ok(())
}

fn replace_outside_range() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    let len = v.len();
    let res = v.replace(2, len + 1, None, 0);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_negative_range() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    let res = v.replace(3, 2, None, 1);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_source_length_mismatch() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    let bytes = [0u8; 7];
    let res = v.replace(1, 2, Some(&bytes[..]), 2);
    check_eq!(Status::of(&res), Status::InvalidArgument);
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_allocation_failure() -> CaseResult {
    let alloc = FailingAllocator::new();
    let mut v = RecordVec::new_in(4, 25, &alloc)?;
    v.assign_typed(&sequence(10))?;
    alloc.arm();
    let res = v.replace_typed(2, 3, &[-1; 30]);
    check_eq!(Status::of(&res), Status::AllocationFailure);
    check_eq!(v.len(), 10);
    check_eq!(v.capacity(), 25);
    check!(is_sequential(&v));
    Ok(())
}

fn replace_matches_erase_then_insert() -> CaseResult {
    let source = [100, 101, 102, 103];
    for i in 0..=6 {
        for j in i..=6 {
            for count in 0..=source.len() {
                let mut spliced = int_vec_with(&sequence(6))?;
                spliced.replace_typed(i, j, &source[..count])?;

                let mut stepwise = int_vec_with(&sequence(6))?;
                stepwise.erase(i, j)?;
                stepwise.insert_typed(i, &source[..count])?;

                check_eq!(ints(&spliced), ints(&stepwise));
            }
        }
    }
    Ok(())
}

// insert

fn insert_empty_vector() -> CaseResult {
    let mut v = int_vec()?;
    v.insert_typed(0, &sequence(5))?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn insert_start() -> CaseResult {
    let mut v = int_vec()?;
    v.insert_typed(0, &[2, 3, 4])?;
    check_eq!(v.len(), 3);
    v.insert_typed(0, &[0, 1])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn insert_middle() -> CaseResult {
    let mut v = int_vec()?;
    v.insert_typed(0, &[0, 1, 4])?;
    v.insert_typed(2, &[2, 3])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn insert_end() -> CaseResult {
    let mut v = int_vec()?;
    v.insert_typed(0, &[0, 1, 2])?;
    let len = v.len();
    v.insert_typed(len, &[3, 4])?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn insert_nothing() -> CaseResult {
    let mut v = int_vec()?;
    v.insert_typed(0, &sequence(5))?;
    for index in [0, 2, 5] {
        v.insert(index, None, 0)?;
        check_eq!(v.len(), 5);
        check!(is_sequential(&v));
    }
    Ok(())
}

fn insert_no_source() -> CaseResult {
    let mut v = int_vec_with(&[-1; 3])?;
    v.insert(0, None, 50)?;
    check_eq!(v.len(), 53);
    check_eq!(v.typed_data::<i32>()?[50..], [-1, -1, -1]);
    Ok(())
}

fn insert_growing_capacity() -> CaseResult {
    let mut v = int_vec()?;
    v.insert_typed(0, &[45, 46, 47, 48, 49])?;
    v.insert_typed(0, &sequence(45))?;
    check_eq!(v.len(), 50);
    check!(is_sequential(&v));
    Ok(())
}

fn insert_count_max() -> CaseResult {
    let mut v = int_vec()?;
    let res = v.insert(0, None, usize::MAX);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 0);
    Ok(())
}

fn insert_outside_range() -> CaseResult {
    let mut v = int_vec()?;
    v.insert_typed(0, &sequence(5))?;
    let len = v.len();
    let res = v.insert(len + 1, None, 0);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

// erase

fn erase_nothing() -> CaseResult {
    let mut v = int_vec()?;
    v.erase(0, 0)?;
    check_eq!(v.len(), 0);
    v.resize(10)?;
    v.erase(0, 0)?;
    check_eq!(v.len(), 10);
    Ok(())
}

fn erase_start() -> CaseResult {
    let mut v = int_vec_with(&[-1, -1, 0, 1, 2, 3, 4])?;
    v.erase(0, 2)?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn erase_middle() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, -1, -1, 2, 3, 4])?;
    v.erase(2, 4)?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn erase_end() -> CaseResult {
    let mut v = int_vec_with(&[0, 1, 2, 3, 4, -1, -1])?;
    let len = v.len();
    v.erase(len - 2, len)?;
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn erase_all() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    let len = v.len();
    v.erase(0, len)?;
    check_eq!(v.len(), 0);
    check_eq!(v.capacity(), 25);
    Ok(())
}

fn erase_outside_range() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    let len = v.len();
    let res = v.erase(2, len + 1);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

fn erase_negative_range() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    let res = v.erase(3, 2);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 5);
    check!(is_sequential(&v));
    Ok(())
}

// push / pop

fn push_back_empty() -> CaseResult {
    let mut v = int_vec()?;
    v.push_back(Some(&0i32.to_ne_bytes()[..]))?;
    check_eq!(v.len(), 1);
    check!(is_sequential(&v));
    Ok(())
}

fn push_back() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    v.push_typed(5i32)?;
    check_eq!(v.len(), 6);
    check!(is_sequential(&v));

    v.push_back(None)?;
    check_eq!(v.len(), 7);
    Ok(())
}

fn push_back_growing_capacity() -> CaseResult {
    let mut v = int_vec()?;
    for i in 0..30i32 {
        v.push_typed(i)?;
        check_eq!(v.len(), i as usize + 1);
        check!(is_sequential(&v));
    }
    check!(v.capacity() >= 30);
    Ok(())
}

fn push_back_amortized_growth() -> CaseResult {
    let alloc = CountingAllocator::new();
    let mut v = RecordVec::new_in(4, 0, &alloc)?;
    let n = 100_000;
    for i in 0..n {
        v.push_typed(i)?;
    }
    check_eq!(v.len(), n as usize);
    check!(is_sequential(&v));
    // 16 records to start with, then growth by at least 1.5x per reallocation
    check!(alloc.reallocations() <= 30);
    check!(alloc.reallocations() >= 10);
    Ok(())
}

fn push_back_allocation_failure() -> CaseResult {
    let alloc = FailingAllocator::new();
    let mut v = RecordVec::new_in(4, 25, &alloc)?;
    v.assign_typed(&sequence(25))?;
    alloc.arm();
    let res = v.push_typed(25i32);
    check_eq!(Status::of(&res), Status::AllocationFailure);
    check_eq!(v.len(), 25);
    check_eq!(v.capacity(), 25);
    check!(is_sequential(&v));

    alloc.disarm();
    v.push_typed(25i32)?;
    check_eq!(v.len(), 26);
    check!(is_sequential(&v));
    Ok(())
}

fn pop_back() -> CaseResult {
    let mut v = int_vec_with(&sequence(5))?;
    v.pop_back()?;
    check_eq!(v.len(), 4);
    check!(is_sequential(&v));
    Ok(())
}

fn pop_back_empty() -> CaseResult {
    let mut v = int_vec()?;
    let res = v.pop_back();
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 0);
    Ok(())
}

// resize

fn resize_zero_size() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.assign(None, 50)?;
    v.resize(0)?;
    check_eq!(v.len(), 0);
    Ok(())
}

fn resize_smaller_size() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.assign(None, 50)?;
    v.resize(25)?;
    check_eq!(v.len(), 25);
    Ok(())
}

fn resize_equal_size() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.assign(None, 50)?;
    v.resize(50)?;
    check_eq!(v.len(), 50);
    Ok(())
}

fn resize_larger_size() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.assign(None, 50)?;
    v.resize(75)?;
    check_eq!(v.len(), 75);
    check_eq!(v.capacity(), 100);
    Ok(())
}

fn resize_larger_capacity() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    v.assign(None, 50)?;
    v.resize(125)?;
    check_eq!(v.len(), 125);
    check!(v.capacity() >= 125);
    Ok(())
}

fn resize_size_max() -> CaseResult {
    let mut v = RecordVec::new(1, 100)?;
    let res = v.resize(usize::MAX);
    check_eq!(Status::of(&res), Status::RangeOrOverflow);
    check_eq!(v.len(), 0);
    check_eq!(v.capacity(), 100);
    Ok(())
}

// copy / swap

fn copy_empty_to_empty() -> CaseResult {
    let mut v1 = RecordVec::new(4, 25)?;
    let v2 = RecordVec::new(4, 50)?;
    v1.copy_from(&v2)?;
    check_eq!(v1.capacity(), 25);
    check_eq!(v1.len(), 0);
    Ok(())
}

fn copy_empty_to_nonempty() -> CaseResult {
    let mut v1 = RecordVec::new(4, 25)?;
    let v2 = RecordVec::new(4, 50)?;
    v1.insert(0, None, 5)?;
    v1.copy_from(&v2)?;
    check_eq!(v1.capacity(), 25);
    check_eq!(v1.len(), 0);
    Ok(())
}

fn copy_nonempty_to_empty() -> CaseResult {
    let mut v1 = RecordVec::new(4, 25)?;
    let mut v2 = RecordVec::new(4, 50)?;
    v2.assign_typed(&sequence(5))?;
    v1.copy_from(&v2)?;
    check_eq!(v1.capacity(), 25);
    check_eq!(v1.len(), 5);
    check!(is_sequential(&v1));
    Ok(())
}

fn copy_nonempty_to_nonempty() -> CaseResult {
    let mut v1 = RecordVec::new(4, 25)?;
    let mut v2 = RecordVec::new(4, 50)?;
    v1.insert(0, None, 10)?;
    v2.assign_typed(&sequence(5))?;
    v1.copy_from(&v2)?;
    check_eq!(v1.capacity(), 25);
    check_eq!(v1.len(), 5);
    check!(is_sequential(&v1));
    Ok(())
}

fn copy_element_size_mismatch() -> CaseResult {
    let mut v1 = RecordVec::new(4, 25)?;
    let mut v2 = RecordVec::new(2, 50)?;
    v2.resize(3)?;
    let res = v1.copy_from(&v2);
    check_eq!(Status::of(&res), Status::InvalidArgument);
    check_eq!(v1.len(), 0);
    Ok(())
}

fn copy_growing_capacity() -> CaseResult {
    let mut v1 = RecordVec::new(4, 25)?;
    let mut v2 = RecordVec::new(4, 50)?;
    v2.assign_typed(&sequence(40))?;
    v1.copy_from(&v2)?;
    check_eq!(v1.len(), 40);
    check!(v1.capacity() >= 40);
    check!(is_sequential(&v1));

    v2.clear();
    check!(is_sequential(&v1));
    Ok(())
}

fn swap() -> CaseResult {
    let mut v1 = RecordVec::new(1, 100)?;
    let mut v2 = RecordVec::new(4, 25)?;
    v2.assign_typed(&sequence(3))?;
    v1.swap(&mut v2);
    check_eq!(v1.capacity(), 25);
    check_eq!(v2.capacity(), 100);
    check_eq!(v1.element_size(), 4);
    check_eq!(v2.element_size(), 1);
    check_eq!(v2.len(), 0);
    check!(is_sequential(&v1));
    Ok(())
}

fn typed_view_size_mismatch() -> CaseResult {
    let mut v = RecordVec::new(3, 25)?;
    v.resize(4)?;
    check_eq!(
        v.typed_data::<i32>().map(|d| d.len()).map_err(|e| e.status()),
        Err::<usize, Status>(Status::InvalidArgument)
    );
    let res = v.push_typed(1i32);
    check_eq!(Status::of(&res), Status::InvalidArgument);
    check_eq!(v.len(), 4);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_names_unique() {
        let cases = all();
        let mut names: Vec<_> = cases.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn test_reference_scenarios_present() {
        let cases = all();
        for name in [
            "capacity",
            "assign_more",
            "insert_start",
            "replace_with_less",
            "reserve_capacity_max",
            "push_back_growing_capacity",
        ] {
            assert!(cases.iter().any(|c| c.name == name), "missing {name}");
        }
    }
}
