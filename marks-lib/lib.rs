//! Register-labelled marks: allocation, ordering, harpoon compaction, editing
//! and sequential navigation over a host-owned mark list.
//!
//! Every function here is pure over its inputs. The host owns the list and
//! passes it in on each call; operations hand back a fresh `Vec` except the
//! two sorts in [`sort`], which permute a slice in place.

pub mod edit;
pub mod harpoon;
pub mod mark;
pub mod mode;
pub mod navigation;
pub mod registers;
pub mod settings;
pub mod sort;

pub use mark::{
  BasicMark,
  Mark,
};
pub use mode::{
  Mode,
  RegisterSpace,
};
pub use settings::RegisterSettings;
