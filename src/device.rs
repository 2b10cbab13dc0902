// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Device identity seam.

/// Identity of the sensor a print was captured with.
pub trait Device {
    /// Name of the driver handling the device.
    fn driver_name(&self) -> &str;
    /// Driver-specific device identifier.
    fn device_id(&self) -> &str;
}

/// Plain device identity, for callers that only have the two strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    pub driver: String,
    pub device_id: String,
}

impl DeviceInfo {
    pub fn new(driver: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            device_id: device_id.into(),
        }
    }
}

impl Device for DeviceInfo {
    fn driver_name(&self) -> &str {
        &self.driver
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }
}
