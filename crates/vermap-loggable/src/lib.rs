//! # vermap-loggable
//!
//! Derives the loggable [`VersioningConfig`] of a class from its XML mapping.
//!
//! [`LoggableXmlDriver`] reads the extension markers layered onto standard
//! mapping tags:
//!
//! ```xml
//! <entity name="App\Entity\Article">
//!     <gedmo:loggable log-entry-class="ArticleLogEntry"/>
//!     <field name="title"><gedmo:versioned/></field>
//!     <embedded name="address" class="App\Entity\Address"><gedmo:versioned/></embedded>
//! </entity>
//! ```
//!
//! and validates the result against the class structure. [`LoggableMetadataFactory`]
//! adds parent-class traversal and caching on top.
//!
//! [`VersioningConfig`]: vermap_core::VersioningConfig

mod driver;
mod error;
mod factory;

pub use driver::LoggableXmlDriver;
pub use error::LoggableError;
pub use factory::LoggableMetadataFactory;
