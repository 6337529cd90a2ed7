// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the evaluation stack.

use super::*;

#[test]
fn push_pop_round_trips() {
    let mut stack = Stack::new();
    stack.push(Value::fixnum(7));
    assert_eq!(stack.stack_ptr(), 1);
    assert_eq!(stack.pop().untag_fixnum(), 7);
    assert_eq!(stack.stack_ptr(), 0);
}

#[test]
fn pop_is_last_in_first_out() {
    let mut stack = Stack::new();
    stack.push(Value::fixnum(1));
    stack.push(Value::fixnum(2));
    stack.push(Value::fixnum(3));
    assert_eq!(stack.pop().untag_fixnum(), 3);
    assert_eq!(stack.pop().untag_fixnum(), 2);
    assert_eq!(stack.pop().untag_fixnum(), 1);
}

#[test]
fn get_and_set_by_absolute_index() {
    let mut stack = Stack::new();
    stack.push(Value::fixnum(1));
    stack.push(Value::fixnum(2));
    stack.set(0, Value::fixnum(99));
    assert_eq!(stack.get(0).untag_fixnum(), 99);
    assert_eq!(stack.get(1).untag_fixnum(), 2);
}

#[test]
fn get_from_top_reads_relative_to_stack_ptr() {
    let mut stack = Stack::new();
    stack.push(Value::fixnum(10));
    stack.push(Value::fixnum(20));
    stack.push(Value::fixnum(30));
    // stack_ptr is 3; distance 1 reads the top, distance 3 reads the bottom.
    assert_eq!(stack.get_from_top(1).untag_fixnum(), 30);
    assert_eq!(stack.get_from_top(3).untag_fixnum(), 10);
}

#[test]
fn truncate_discards_above_len() {
    let mut stack = Stack::new();
    stack.push(Value::fixnum(1));
    stack.push(Value::fixnum(2));
    stack.push(Value::fixnum(3));
    stack.truncate(1);
    assert_eq!(stack.stack_ptr(), 1);
    assert_eq!(stack.get(0).untag_fixnum(), 1);
}

#[test]
fn base_ptr_is_independent_of_stack_ptr() {
    let mut stack = Stack::new();
    stack.push(Value::fixnum(1));
    stack.base_ptr = 1;
    stack.push(Value::fixnum(2));
    stack.push(Value::fixnum(3));
    assert_eq!(stack.base_ptr, 1);
    assert_eq!(stack.stack_ptr(), 3);
}

#[test]
fn push_raw_survives_round_trip_as_opaque_word() {
    let mut stack = Stack::new();
    stack.push_raw(0xDEAD_BEEF);
    assert_eq!(stack.pop().to_raw(), 0xDEAD_BEEF);
}

#[test]
fn reading_below_logical_top_after_truncate_still_sees_old_data() {
    let mut stack = Stack::new();
    stack.push(Value::fixnum(42));
    stack.push(Value::fixnum(43));
    stack.truncate(1);
    // The physical cell at index 1 has not been overwritten yet.
    assert_eq!(stack.cells[1], Value::fixnum(43).to_raw());
}

#[test]
#[should_panic(expected = "stack underflow")]
fn pop_on_empty_stack_panics() {
    let mut stack = Stack::new();
    stack.pop();
}

#[test]
fn len_and_is_empty() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    stack.push(Value::fixnum(1));
    assert_eq!(stack.len(), 1);
    assert!(!stack.is_empty());
}
