pub mod equality_tests;
pub mod record_tests;

use crate::device::DeviceInfo;
use crate::print::PrintRecord;
use crate::types::MinutiaTemplate;

/// A simple deterministic RNG for tests.
pub(crate) struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed, inc: 1 }
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate.wrapping_mul(6364136223846793005).wrapping_add(self.inc);
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27) as u32;
        let rot = (oldstate >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub(crate) fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

pub(crate) fn device() -> DeviceInfo {
    DeviceInfo::new("synaptics", "0001")
}

/// Single-row template tagged by its `x` value.
pub(crate) fn tagged_template(tag: i32) -> MinutiaTemplate {
    MinutiaTemplate::from_columns(&[tag], &[tag * 2], &[tag % 180]).unwrap()
}

pub(crate) fn template_print(tags: &[i32]) -> PrintRecord {
    let mut print = PrintRecord::template_set("synaptics", "0001");
    for tag in tags {
        print.add_template(tagged_template(*tag)).unwrap();
    }
    print
}
