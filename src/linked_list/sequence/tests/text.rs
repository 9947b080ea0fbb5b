use alloc::{string::ToString, vec};

use super::values;
use crate::linked_list::sequence::{ParseError, SequenceList};

#[test]
fn test_display_non_empty() {
    let mut list = SequenceList::new();
    list.insert_last(3);
    list.insert_last(1);
    list.insert_last(2);
    assert_eq!(list.to_string(), "3 1 2 ");
}

#[test]
fn test_display_empty_is_zero() {
    let list = SequenceList::<i32>::new();
    assert_eq!(list.to_string(), "0");
}

#[test]
fn test_parse_new_sequence() {
    let list: SequenceList<i32> = "3 1 2".parse().unwrap();
    assert_eq!(values(&list), vec![3, 1, 2]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_parse_empty_input() {
    let list: SequenceList<i32> = "  \n ".parse().unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_parse_rejects_malformed_token() {
    let err = "1 two 3".parse::<SequenceList<i32>>().unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.token, "two");
}

#[test]
fn test_extend_from_tokens_keeps_prefix() {
    let mut list = SequenceList::new();
    list.insert_last(0);

    let err: ParseError<_> = list.extend_from_tokens("1\t2 x 4").unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(values(&list), vec![0, 1, 2]);
}

#[test]
fn test_display_then_parse() {
    let list: SequenceList<i64> = [-4, 0, 17].into_iter().collect();
    let parsed: SequenceList<i64> = list.to_string().parse().unwrap();
    assert_eq!(values(&parsed), vec![-4, 0, 17]);
}

#[cfg(feature = "std")]
mod stream {
    use std::io::Cursor;
    use std::vec::Vec;

    use super::super::values;
    use crate::linked_list::sequence::{ReadError, SequenceList};

    #[test]
    fn test_read_from_multiple_lines() {
        let mut list = SequenceList::<i32>::new();
        let appended = list.read_from(Cursor::new("3 1\n2\n\n 7 ")).unwrap();
        assert_eq!(appended, 4);
        assert_eq!(values(&list), std::vec![3, 1, 2, 7]);
    }

    #[test]
    fn test_read_new_from_clears_first() {
        let mut list: SequenceList<i32> = [9, 9].into_iter().collect();
        list.read_new_from(Cursor::new("3 1 2")).unwrap();
        assert_eq!(values(&list), std::vec![3, 1, 2]);
    }

    #[test]
    fn test_read_from_stops_at_malformed_token() {
        let mut list = SequenceList::<u8>::new();
        let err = list.read_from(Cursor::new("1 2\n3 300 4\n5")).unwrap_err();
        match err {
            ReadError::Parse(err) => {
                assert_eq!(err.index, 3);
                assert_eq!(err.token, "300");
            }
            ReadError::Io(err) => panic!("unexpected io error: {err}"),
        }
        assert_eq!(values(&list), std::vec![1, 2, 3]);
    }

    #[test]
    fn test_write_to() {
        let list: SequenceList<i32> = [3, 1, 2].into_iter().collect();
        let mut out = Vec::new();
        list.write_to(&mut out).unwrap();
        assert_eq!(out, b"3 1 2 ");

        let mut out = Vec::new();
        SequenceList::<i32>::new().write_to(&mut out).unwrap();
        assert_eq!(out, b"0");
    }
}
