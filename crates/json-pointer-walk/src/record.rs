//! Typed records.
//!
//! A record exposes its fields through a `'static` table of [`Field`]
//! descriptors. A pointer step selects a field by its serialization name
//! when one is declared, otherwise by its declared name. Private and skipped
//! fields are never visible to the walker.
//!
//! Records are usually declared with [`impl_record!`](crate::impl_record):
//!
//! ```
//! use json_pointer_walk::{find_by_pointer, impl_record};
//!
//! #[derive(Debug)]
//! struct User {
//!     name: String,
//!     email: String,
//!     token: String,
//! }
//!
//! impl_record!(User {
//!     name: rename("userName"),
//!     email,
//!     token: skip,
//! });
//!
//! let user = User { name: "Ada".into(), email: "ada@example.com".into(), token: "x".into() };
//! let r = find_by_pointer(&user, "/userName").unwrap();
//! assert_eq!(r.val.and_then(|v| v.downcast_ref::<String>()).map(String::as_str), Some("Ada"));
//! assert!(find_by_pointer(&user, "/token").unwrap().val.is_none());
//! ```

use crate::node::Node;

/// Field descriptor of a typed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    rename: Option<&'static str>,
    private: bool,
    skip: bool,
}

impl Field {
    /// Public field addressed by its declared name.
    pub const fn named(name: &'static str) -> Self {
        Field {
            name,
            rename: None,
            private: false,
            skip: false,
        }
    }

    /// Address the field by a serialization name instead of its declared name.
    pub const fn rename(self, tag: &'static str) -> Self {
        Field {
            rename: Some(tag),
            ..self
        }
    }

    /// Hide the field, it is not part of the record's public surface.
    pub const fn private(self) -> Self {
        Field {
            private: true,
            ..self
        }
    }

    /// Exclude the field from serialization.
    pub const fn skip(self) -> Self {
        Field { skip: true, ..self }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name a pointer step must use to reach this field.
    pub fn serialized_name(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }

    pub fn is_visible(&self) -> bool {
        !self.private && !self.skip
    }
}

/// A struct-like node with named fields.
pub trait Record {
    /// Field table, in declaration order.
    fn fields(&self) -> &'static [Field];

    /// Value of the field at `index` in [`Record::fields`].
    fn field(&self, index: usize) -> Option<&dyn Node>;
}

/// Position of the field selected by `key`.
///
/// Serialization names take precedence over declared names, so a field
/// renamed to `"id"` shadows another field declared as `id`.
pub fn field_index(fields: &[Field], key: &str) -> Option<usize> {
    fields
        .iter()
        .position(|f| f.is_visible() && f.rename == Some(key))
        .or_else(|| {
            fields
                .iter()
                .position(|f| f.is_visible() && f.rename.is_none() && f.name == key)
        })
}

/// Look up a record field by pointer key.
pub fn lookup<'a>(record: &'a dyn Record, key: &str) -> Option<&'a dyn Node> {
    let index = field_index(record.fields(), key)?;
    record.field(index)
}

/// Implement [`Record`] and [`Node`] for a struct.
///
/// Each listed field may carry one attribute:
///
/// - `rename("tag")`: addressed as `tag` instead of the field name;
/// - `private`: never visible;
/// - `skip`: never visible.
///
/// Every listed field must implement [`Node`].
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident $(: $attr:ident $(($tag:literal))?)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields(&self) -> &'static [$crate::Field] {
                const FIELDS: &[$crate::Field] = &[
                    $( $crate::Field::named(stringify!($field)) $( .$attr($($tag)?) )? ),*
                ];
                FIELDS
            }

            fn field(&self, index: usize) -> Option<&dyn $crate::Node> {
                let fields: &[&dyn $crate::Node] = &[$( &self.$field ),*];
                fields.get(index).copied()
            }
        }

        impl $crate::Node for $ty {
            fn kind(&self) -> $crate::NodeKind<'_> {
                $crate::NodeKind::Record(self)
            }
        }
    };
}
