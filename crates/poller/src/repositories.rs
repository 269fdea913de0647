mod follow_list;

pub use follow_list::{FileFollowList, FollowListError, FollowSource};
