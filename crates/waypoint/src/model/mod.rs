//! Model/View support for Waypoint.
//!
//! Models separate data from display: a view asks an [`ItemModel`] for the
//! data at a [`ModelIndex`] under an [`ItemRole`] and listens to
//! [`ModelSignals`] for invalidation.
//!
//! # Core Types
//!
//! - `ModelIndex`: identifies a row/column in a model
//! - `ItemRole`: specifies what kind of data to access
//! - `ItemData`: the returned data
//! - `ItemModel`: the trait models implement
//!
//! # Model Implementations
//!
//! - `RouteListModel`: the stops of an indoor route, backed by
//!   [`FeatureRow`]s
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use waypoint::model::{ItemModel, RouteListModel};
//! use waypoint::RouteSettings;
//!
//! let model = RouteListModel::new(Some(vec![None, None]), Arc::new(RouteSettings::default()));
//! let first = model.index(0, 0);
//! println!("{:?}", model.display_text(&first));
//! ```

mod feature;
mod index;
mod role;
mod route_list;
mod traits;

pub use feature::{AttributeValue, FeatureRow};
pub use index::ModelIndex;
pub use role::{ItemData, ItemRole};
pub use route_list::{
    AttributeLookupError, CURRENT_LOCATION, DisplayPayload, RouteListModel, RowRole,
    UNKNOWN_LOCATION, lookup_row, row_content, row_count,
};
pub use traits::{ItemModel, ModelSignals};
