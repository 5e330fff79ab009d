//! # Wish List Module
//!
//! The in-memory collection manager: ordered wishes, an identity counter,
//! and add / remove / update by id.

pub mod collection;
pub mod errors;
pub mod record;

pub use collection::{WishList, SEED_DESCRIPTION};
pub use errors::{WishError, WishResult};
pub use record::{Wish, WishPayload};
