//! Feature registry: flag -> feature handler.
//!
//! Built once at startup from an explicit list and then only read.

use std::collections::HashMap;
use std::fmt;

use crate::application::{ApplicationError, ports::Feature};
use crate::domain::FeatureFlag;
use crate::error::IdfNewResult;

#[derive(Default)]
pub struct FeatureRegistry {
    features: Vec<Box<dyn Feature>>,
    index: HashMap<String, usize>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a feature. Fails when its flag is malformed or already taken.
    pub fn register(&mut self, feature: Box<dyn Feature>) -> IdfNewResult<()> {
        let flag = FeatureFlag::parse(feature.flag())?;
        if self.index.contains_key(flag.as_str()) {
            return Err(ApplicationError::DuplicateFeature {
                flag: flag.to_string(),
            }
            .into());
        }
        self.index.insert(flag.to_string(), self.features.len());
        self.features.push(feature);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, feature: Box<dyn Feature>) -> IdfNewResult<Self> {
        self.register(feature)?;
        Ok(self)
    }

    pub fn get(&self, flag: &str) -> IdfNewResult<&dyn Feature> {
        self.index
            .get(flag)
            .map(|&i| self.features[i].as_ref())
            .ok_or_else(|| {
                ApplicationError::UnknownFeature {
                    flag: flag.to_string(),
                }
                .into()
            })
    }

    /// Features in registration order.
    pub fn list(&self) -> impl Iterator<Item = &dyn Feature> {
        self.features.iter().map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl fmt::Debug for FeatureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.features.iter().map(|feat| feat.flag()))
            .finish()
    }
}
