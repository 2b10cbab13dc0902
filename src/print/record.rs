// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Print record definition.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::codec;
use crate::device::Device;
use crate::error::{PrintError, PrintResult};
use crate::image::Image;
use crate::minutiae::{encode_minutiae, CoordinateTransform, NistTransform};
use crate::types::{Finger, MinutiaTemplate, PrintKind};
use crate::variant::Variant;

/// Template data held by a print.
#[derive(Clone, Debug, Default)]
pub enum PrintData {
    /// Not yet initialised; only valid while an enrollment record is being set up.
    #[default]
    Undefined,
    /// Opaque driver data, kept exactly as given.
    Raw(Variant),
    /// Minutiae templates in append order.
    TemplateSet(Vec<MinutiaTemplate>),
}

impl PrintData {
    pub fn kind(&self) -> PrintKind {
        match self {
            PrintData::Undefined => PrintKind::Undefined,
            PrintData::Raw(_) => PrintKind::Raw,
            PrintData::TemplateSet(_) => PrintKind::TemplateSet,
        }
    }
}

/// Raw driver data must survive serialization unchanged.
fn check_raw(data: &Variant) -> PrintResult<()> {
    data.validate()
        .map_err(|e| PrintError::InvalidData(format!("raw print data cannot be stored: {e}")))
}

/// One enrolled or captured fingerprint.
///
/// Driver and device id identify the hardware the data is valid for and
/// never change. The kind of data is fixed the first time it is set. The
/// remaining metadata is free to change and plays no part in matching or
/// equality.
#[derive(Clone, Debug)]
pub struct PrintRecord {
    driver: String,
    device_id: String,
    device_stored: bool,
    image: Option<Arc<Image>>,

    finger: Finger,
    username: Option<String>,
    description: Option<String>,
    enroll_date: Option<NaiveDate>,

    data: PrintData,
}

impl PrintRecord {
    pub(crate) fn from_parts(driver: String, device_id: String, data: PrintData) -> Self {
        assert!(!driver.is_empty(), "print driver must not be empty");
        assert!(!device_id.is_empty(), "print device id must not be empty");
        Self {
            driver,
            device_id,
            device_stored: false,
            image: None,
            finger: Finger::Unknown,
            username: None,
            description: None,
            enroll_date: None,
            data,
        }
    }

    /// Creates an empty print for `device`, to be initialised by the driver
    /// with [`init_raw`](Self::init_raw) or [`init_template_set`](Self::init_template_set).
    pub fn new(device: &(impl Device + ?Sized)) -> Self {
        Self::from_parts(device.driver_name().to_string(), device.device_id().to_string(), PrintData::Undefined)
    }

    /// Creates a print holding opaque driver data.
    ///
    /// Fails with `InvalidData` if `data` cannot be serialized.
    pub fn raw(driver: impl Into<String>, device_id: impl Into<String>, data: Variant) -> PrintResult<Self> {
        check_raw(&data)?;
        Ok(Self::from_parts(driver.into(), device_id.into(), PrintData::Raw(data)))
    }

    /// Creates a print holding an (initially empty) set of minutiae templates.
    pub fn template_set(driver: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self::from_parts(driver.into(), device_id.into(), PrintData::TemplateSet(Vec::new()))
    }

    /// Sets the data of an undefined print to `data`. Fails with
    /// `InvalidData`, leaving the print undefined, if `data` cannot be
    /// serialized.
    ///
    /// # Panics
    /// If the print kind has already been set.
    pub fn init_raw(&mut self, data: Variant) -> PrintResult<()> {
        self.assert_undefined();
        check_raw(&data)?;
        self.init_data(PrintData::Raw(data));
        Ok(())
    }

    /// Turns an undefined print into an empty template set.
    ///
    /// # Panics
    /// If the print kind has already been set.
    pub fn init_template_set(&mut self) {
        self.init_data(PrintData::TemplateSet(Vec::new()));
    }

    fn assert_undefined(&self) {
        assert!(
            matches!(self.data, PrintData::Undefined),
            "print kind can only be set once (currently {:?})",
            self.data.kind()
        );
    }

    fn init_data(&mut self, data: PrintData) {
        self.assert_undefined();
        self.data = data;
    }

    pub fn kind(&self) -> PrintKind {
        self.data.kind()
    }

    pub fn data(&self) -> &PrintData {
        &self.data
    }

    pub fn raw_data(&self) -> Option<&Variant> {
        match &self.data {
            PrintData::Raw(data) => Some(data),
            _ => None,
        }
    }

    pub fn templates(&self) -> Option<&[MinutiaTemplate]> {
        match &self.data {
            PrintData::TemplateSet(templates) => Some(templates),
            _ => None,
        }
    }

    pub fn driver(&self) -> &str {
        &self.driver
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Whether this print is a handle to data stored on the device itself.
    pub fn device_stored(&self) -> bool {
        self.device_stored
    }

    pub fn set_device_stored(&mut self, device_stored: bool) {
        self.device_stored = device_stored;
    }

    /// Image the templates were extracted from. Only present right after
    /// enrollment from an image; never serialized.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_deref()
    }

    pub fn finger(&self) -> Finger {
        self.finger
    }

    pub fn set_finger(&mut self, finger: Finger) {
        self.finger = finger;
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn enroll_date(&self) -> Option<NaiveDate> {
        self.enroll_date
    }

    pub fn set_enroll_date(&mut self, enroll_date: Option<NaiveDate>) {
        self.enroll_date = enroll_date;
    }

    fn templates_mut(&mut self) -> PrintResult<&mut Vec<MinutiaTemplate>> {
        match &mut self.data {
            PrintData::TemplateSet(templates) => Ok(templates),
            other => Err(PrintError::InvalidState(format!(
                "templates can only be added to a template set, not {:?}",
                other.kind()
            ))),
        }
    }

    /// Appends a template.
    pub fn add_template(&mut self, template: MinutiaTemplate) -> PrintResult<()> {
        self.templates_mut()?.push(template);
        Ok(())
    }

    /// Appends the single template of `other`, e.g. one enrollment stage.
    pub fn add_print(&mut self, other: &PrintRecord) -> PrintResult<()> {
        let template = match other.templates() {
            Some([template]) => template.clone(),
            Some(templates) => {
                return Err(PrintError::General(format!(
                    "print to add must hold exactly one template, found {}",
                    templates.len()
                )))
            }
            None => {
                return Err(PrintError::InvalidState(format!(
                    "only template set prints can be added, not {:?}",
                    other.kind()
                )))
            }
        };
        self.add_template(template)
    }

    /// Extracts a template from the minutiae detected in `image` (NIST
    /// coordinates) and keeps the image for inspection.
    pub fn add_from_image(&mut self, image: Arc<Image>) -> PrintResult<()> {
        self.add_from_image_with(image, &NistTransform)
    }

    /// As [`add_from_image`](Self::add_from_image) with a custom coordinate transform.
    pub fn add_from_image_with<T: CoordinateTransform>(&mut self, image: Arc<Image>, transform: &T) -> PrintResult<()> {
        if self.kind() != PrintKind::TemplateSet {
            return Err(PrintError::InvalidData("Cannot add print data from image!".to_string()));
        }
        let minutiae = image
            .minutiae()
            .filter(|m| !m.is_empty())
            .ok_or_else(|| PrintError::InvalidData("No minutiae found in image or not yet detected!".to_string()))?;

        let template = encode_minutiae(minutiae, image.width(), image.height(), transform)?;
        self.templates_mut()?.push(template);
        self.image = Some(image);
        Ok(())
    }

    /// Whether this print can be used with `device`.
    pub fn is_compatible(&self, device: &(impl Device + ?Sized)) -> bool {
        self.driver == device.driver_name() && self.device_id == device.device_id()
    }

    /// Serializes to the FP3 storage format.
    pub fn to_bytes(&self) -> PrintResult<Vec<u8>> {
        codec::encode(self)
    }

    /// Parses the FP3 storage format.
    pub fn from_bytes(data: &[u8]) -> PrintResult<Self> {
        codec::decode(data)
    }
}
