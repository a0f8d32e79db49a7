//! Newtype identifiers for generated primary keys.
//!
//! Every table with a `SERIAL` key gets its own wrapper so a `ProductId`
//! can never be passed where a `CategoryId` is expected.

/// Declare one or more `i32`-backed identifier newtypes.
///
/// Each generated type:
/// - serializes transparently as its inner integer
/// - is `Copy`, `Eq`, `Ord` and `Hash`
/// - converts to and from `i32` and parses from a decimal string
/// - binds and decodes as Postgres `INTEGER` when the `postgres` feature is on
///
/// # Example
///
/// ```rust
/// # use shop_core::define_ids;
/// define_ids!(WidgetId, GadgetId);
///
/// let widget = WidgetId::new(7);
/// assert_eq!(widget.as_i32(), 7);
/// assert_eq!("7".parse::<WidgetId>().ok(), Some(widget));
///
/// // Distinct types, so this does not compile:
/// // let _: GadgetId = widget;
/// ```
#[macro_export]
macro_rules! define_ids {
    (@one $name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw key value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// The raw key value.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <i32 as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <i32 as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                <i32 as ::sqlx::Decode<::sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::core::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <i32 as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
    ($($name:ident),+ $(,)?) => {
        $( $crate::define_ids!(@one $name); )+
    };
}

define_ids!(UserId, CategoryId, ProductId, OrderId, PaymentId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn test_parse() {
        assert_eq!("15".parse::<OrderId>().unwrap(), OrderId::new(15));
        assert!("fifteen".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_i32_conversions() {
        let id = UserId::from(9);
        let raw: i32 = id.into();
        assert_eq!(raw, 9);
        assert_eq!(id.as_i32(), 9);
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&CategoryId::new(3)).unwrap();
        assert_eq!(json, "3");

        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CategoryId::new(3));
    }

    #[test]
    fn test_ordering_follows_inner_value() {
        assert!(PaymentId::new(1) < PaymentId::new(2));
    }
}
