pub mod seq_num;
pub mod seq_unwrapper;

pub use seq_num::{
    SEQ_MODULUS, SeqNumExt, is_newer_than, is_next_after, is_older_than, normalize,
    num_packets_between, random_initial, rolled_over_to, signed_delta,
};
pub use seq_unwrapper::SeqUnwrapper;
