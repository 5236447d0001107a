pub mod link_list;
pub mod random;
