pub mod avatar_id;
pub mod catalog;
pub mod metrics;
pub mod transformer;

pub use avatar_id::{AvatarIdGenerator, AVATAR_ID_MODULUS};
pub use catalog::AvatarCatalog;
pub use self::metrics::{get_metrics, init_metrics};
pub use transformer::{FrameTransformer, PassthroughTransformer};
