extern crate std;

use alloc::vec::Vec;

use super::SequenceList;

mod text;

fn values<T: Clone>(list: &SequenceList<T>) -> Vec<T> {
    list.assert_invariants();
    list.iter().cloned().collect()
}
