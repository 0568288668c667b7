//! Declarative transition hints carried by element options.
//!
//! The engine records and merges these hints; interpolating them over time is
//! the animation subsystem's job, not this crate's.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// Properties a transition scope may name.
pub const TRANSITIONABLE_PROPS: &[&str] =
    &["x", "y", "scale_x", "scale_y", "rotation", "opacity"];

/// Which declared properties should animate on update.
///
/// Serialized either as the keyword `"all"` or as an explicit property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionScope {
    All,
    Props(Vec<String>),
}

impl TransitionScope {
    pub fn validate(&self) -> ChartResult<()> {
        let Self::Props(props) = self else {
            return Ok(());
        };
        if props.is_empty() {
            return Err(ChartError::InvalidOption(
                "transition property list must not be empty".to_owned(),
            ));
        }
        for prop in props {
            if !TRANSITIONABLE_PROPS.contains(&prop.as_str()) {
                return Err(ChartError::InvalidOption(format!(
                    "`{prop}` is not a transitionable property"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn covers(&self, prop: &str) -> bool {
        match self {
            Self::All => TRANSITIONABLE_PROPS.contains(&prop),
            Self::Props(props) => props.iter().any(|candidate| candidate == prop),
        }
    }
}

impl Serialize for TransitionScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Props(props) => props.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TransitionScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScopeVisitor;

        impl<'de> Visitor<'de> for ScopeVisitor {
            type Value = TransitionScope;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("the keyword \"all\" or a list of property names")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value == "all" {
                    Ok(TransitionScope::All)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut props = Vec::new();
                while let Some(prop) = seq.next_element::<String>()? {
                    props.push(prop);
                }
                Ok(TransitionScope::Props(props))
            }
        }

        deserializer.deserialize_any(ScopeVisitor)
    }
}

/// Partial property snapshot used as an enter-from or leave-to target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PropSnapshot {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
}

impl PropSnapshot {
    pub fn validate(&self) -> ChartResult<()> {
        for (prop, value) in [
            ("x", self.x),
            ("y", self.y),
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
            ("rotation", self.rotation),
            ("opacity", self.opacity),
        ] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ChartError::InvalidOption(format!(
                        "transition snapshot `{prop}` must be finite"
                    )));
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.scale_x.is_none()
            && self.scale_y.is_none()
            && self.rotation.is_none()
            && self.opacity.is_none()
    }

    /// Overlays declared fields of `newer` onto `self`.
    pub fn merge_from(&mut self, newer: &PropSnapshot) {
        if newer.x.is_some() {
            self.x = newer.x;
        }
        if newer.y.is_some() {
            self.y = newer.y;
        }
        if newer.scale_x.is_some() {
            self.scale_x = newer.scale_x;
        }
        if newer.scale_y.is_some() {
            self.scale_y = newer.scale_y;
        }
        if newer.rotation.is_some() {
            self.rotation = newer.rotation;
        }
        if newer.opacity.is_some() {
            self.opacity = newer.opacity;
        }
    }
}

/// Transition hints declared on one element option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransitionHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter_from: Option<PropSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_to: Option<PropSnapshot>,
}

impl TransitionHints {
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(scope) = &self.transition {
            scope.validate()?;
        }
        if let Some(snapshot) = &self.enter_from {
            snapshot.validate()?;
        }
        if let Some(snapshot) = &self.leave_to {
            snapshot.validate()?;
        }
        Ok(())
    }

    /// Merges newly declared hints over the stored ones.
    ///
    /// Absent fields keep the prior stored value, so a leave-to target
    /// declared once survives later updates that do not restate it.
    pub fn merge_from(&mut self, newer: &TransitionHints) {
        if newer.transition.is_some() {
            self.transition = newer.transition.clone();
        }
        if let Some(newer_enter) = &newer.enter_from {
            match &mut self.enter_from {
                Some(stored) => stored.merge_from(newer_enter),
                None => self.enter_from = Some(*newer_enter),
            }
        }
        if let Some(newer_leave) = &newer.leave_to {
            match &mut self.leave_to {
                Some(stored) => stored.merge_from(newer_leave),
                None => self.leave_to = Some(*newer_leave),
            }
        }
    }
}
