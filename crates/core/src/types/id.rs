//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing a product id with a cart line key.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, `AsRef<str>` and `Display`
///
/// # Example
///
/// ```rust
/// # use atelier_core::define_id;
/// define_id!(ShopperId);
/// define_id!(CouponCode);
///
/// let shopper = ShopperId::new("42");
/// let coupon = CouponCode::new("42");
///
/// // These are different types, so this won't compile:
/// // let _: ShopperId = coupon;
/// assert_eq!(shopper.as_str(), coupon.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(LineKey);

impl LineKey {
    /// Derive the cart line key for a product and an optional size.
    ///
    /// The key is the bare product id when no size was chosen, otherwise
    /// `"<id>-<size>"`. An empty size string counts as no size.
    ///
    /// ```
    /// use atelier_core::{LineKey, ProductId};
    ///
    /// let id = ProductId::new("3");
    /// assert_eq!(LineKey::for_product(&id, None).as_str(), "3");
    /// assert_eq!(LineKey::for_product(&id, Some("M")).as_str(), "3-M");
    /// ```
    #[must_use]
    pub fn for_product(product_id: &ProductId, selected_size: Option<&str>) -> Self {
        match selected_size {
            Some(size) if !size.is_empty() => Self(format!("{product_id}-{size}")),
            _ => Self(product_id.as_str().to_owned()),
        }
    }
}
