//! Physical-to-device scaling.
//!
//! Designers work in centimeters; everything drawn works in device units.
//! One ratio, `device_width / total_width_cm`, links the two for a whole
//! profile so every proportion survives the conversion.

use std::collections::BTreeMap;

use crate::error::GeometryError;

/// Device width shared by every profile, independent of content.
pub const DEVICE_WIDTH: f64 = 4096.0;

/// Thinnest stroke that stays visible and cuttable, in device units.
pub const MIN_STROKE: f64 = 1.0;

/// How a length is treated after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    /// Plain geometry, scaled proportionally.
    Extent,
    /// A stroke width, floored at [`MIN_STROKE`].
    Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct NamedLength {
    cm: f64,
    class: LengthClass,
}

/// An immutable set of named lengths converted to device units.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingModel {
    name: String,
    device_width: f64,
    total_width_cm: f64,
    ratio: f64,
    lengths: BTreeMap<String, NamedLength>,
}

/// Collects lengths before the ratio is fixed.
#[derive(Debug, Clone)]
pub struct ScalingBuilder {
    name: String,
    device_width: f64,
    total_width_cm: Option<f64>,
    lengths: BTreeMap<String, NamedLength>,
}

impl ScalingModel {
    pub fn builder(name: impl Into<String>, device_width: f64) -> ScalingBuilder {
        ScalingBuilder {
            name: name.into(),
            device_width,
            total_width_cm: None,
            lengths: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Device units per centimeter.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn device_width(&self) -> f64 {
        self.device_width
    }

    pub fn total_width_cm(&self) -> f64 {
        self.total_width_cm
    }

    /// Physical value of a named length.
    pub fn cm(&self, name: &str) -> Result<f64, GeometryError> {
        self.lengths
            .get(name)
            .map(|l| l.cm)
            .ok_or_else(|| GeometryError::UnknownLength(name.to_string()))
    }

    /// Device value of a named length, strokes floored at [`MIN_STROKE`].
    pub fn device(&self, name: &str) -> Result<f64, GeometryError> {
        let length = self
            .lengths
            .get(name)
            .ok_or_else(|| GeometryError::UnknownLength(name.to_string()))?;
        Ok(self.apply(length.cm, length.class))
    }

    /// Convert an unnamed physical length with this model's ratio.
    pub fn to_device(&self, cm: f64) -> f64 {
        cm * self.ratio
    }

    /// Iterate `(name, device value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.lengths
            .iter()
            .map(|(name, l)| (name.as_str(), self.apply(l.cm, l.class)))
    }

    fn apply(&self, cm: f64, class: LengthClass) -> f64 {
        let device = cm * self.ratio;
        match class {
            LengthClass::Extent => device,
            LengthClass::Stroke => device.max(MIN_STROKE),
        }
    }
}

impl ScalingBuilder {
    /// The physical width that maps onto the device width.
    pub fn total_width(mut self, cm: f64) -> Self {
        self.total_width_cm = Some(cm);
        self
    }

    pub fn extent(self, name: impl Into<String>, cm: f64) -> Self {
        self.length(name, cm, LengthClass::Extent)
    }

    pub fn stroke(self, name: impl Into<String>, cm: f64) -> Self {
        self.length(name, cm, LengthClass::Stroke)
    }

    pub fn length(mut self, name: impl Into<String>, cm: f64, class: LengthClass) -> Self {
        self.lengths.insert(name.into(), NamedLength { cm, class });
        self
    }

    /// Validate every length and fix the ratio.
    pub fn build(self) -> Result<ScalingModel, GeometryError> {
        let total = self
            .total_width_cm
            .ok_or_else(|| GeometryError::MissingTotalWidth(self.name.clone()))?;
        check_positive("total_width", total)?;
        check_positive("device_width", self.device_width)?;
        for (name, length) in &self.lengths {
            check_positive(name, length.cm)?;
        }

        Ok(ScalingModel {
            ratio: self.device_width / total,
            name: self.name,
            device_width: self.device_width,
            total_width_cm: total,
            lengths: self.lengths,
        })
    }
}

pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositiveLength { name: name.to_string(), value })
    }
}
