use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, GoodId};

/// A stock-keeping unit: unique id plus display name. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Good {
    id: GoodId,
    name: String,
}

impl Good {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let id = GoodId::new(id)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("good name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Good {
    type Id = GoodId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Good {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
