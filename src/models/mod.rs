pub mod review;
pub mod stats;
pub mod store;

pub use review::{NewReview, RatingSample, Review, ReviewDraft};
pub use stats::ReviewStats;
pub use store::{NewStore, Store, StoreDetail, StoreDraft, StoreSummary};
