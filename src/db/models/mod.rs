// Sub-modules organized by functional domain
pub mod board;
pub mod changeset;
pub mod custom_field;
pub mod issue;
pub mod journal;
pub mod member;
pub mod polymorphic;
pub mod project;
pub mod system;
pub mod time_entry;
pub mod user;
pub mod wiki;

// Identity and access
pub use member::*;
pub use user::*;

// Projects, versions, news, documents, saved queries
pub use project::*;

// Issues and their catalogs (trackers, statuses, enumerations, workflows)
pub use issue::*;
pub use time_entry::*;

// Polymorphic collaboration records
pub use journal::*;
pub use polymorphic::PolymorphicRef;

// Custom fields
pub use custom_field::*;

// Version control
pub use changeset::*;

// Wiki and forums
pub use board::*;
pub use wiki::*;

// Settings, attachments, imports, migrations
pub use system::*;
