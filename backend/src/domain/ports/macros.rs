//! Defines helper macros for generating domain port error enums.

macro_rules! define_port_error {
    (@ctor $name:ident $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $name:ident $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $name $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $name:ident $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $name:ident $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $name
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $name $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation checks.
    define_port_error! {
        pub enum ExampleStoreError {
            Offline => "store offline",
            Query { message: String } => "query failed: {message}",
            Missing { table_id: i32 } => "table {table_id} missing",
            Mixed { message: String, table_id: i32 } => "{message} on table {table_id}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(ExampleStoreError::offline().to_string(), "store offline");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExampleStoreError::query("syntax error");
        assert_eq!(err.to_string(), "query failed: syntax error");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExampleStoreError::missing(42_i32);
        assert_eq!(err.to_string(), "table 42 missing");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExampleStoreError::mixed("deadlock", 3_i32);
        assert_eq!(err.to_string(), "deadlock on table 3");
    }
}
