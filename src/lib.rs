#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod forest;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod validate;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{AssemblyConfig, ChildSpacing, Config, LayoutConfig};
pub use error::{Error, Result};
pub use forest::{Forest, NodeId, TreeNode, build_forest, build_forest_with};
pub use ir::{NodeRecord, Record};
pub use layout::{
    Bounds, Connector, compute_layout, layout_bounds, route_connectors, subtree_width,
};
pub use parser::parse_records;
pub use validate::{RecordIssue, validate_records};
