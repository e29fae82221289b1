// src/domain/identifier.rs

/// Declares a UUID-backed identifier newtype. The nil UUID is rejected so a
/// zeroed id can never reach a repository.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(uuid::Uuid);

        impl $name {
            pub fn new(id: uuid::Uuid) -> $crate::domain::errors::DomainResult<Self> {
                if id.is_nil() {
                    Err($crate::domain::errors::DomainError::Validation(
                        concat!($label, " id must not be nil").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }

            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn parse(value: &str) -> $crate::domain::errors::DomainResult<Self> {
                let id = uuid::Uuid::parse_str(value.trim()).map_err(|_| {
                    $crate::domain::errors::DomainError::Validation(
                        concat!("invalid ", $label, " id").into(),
                    )
                })?;
                Self::new(id)
            }

            pub const fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl From<$name> for uuid::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub(crate) use uuid_identifier;
