use chrono::NaiveDate;
use fprint_core::config::MAX_MINUTIAE;
use fprint_core::{Finger, MinutiaTemplate, PrintRecord};
use proptest::prelude::*;

fn template() -> impl Strategy<Value = MinutiaTemplate> {
    prop::collection::vec((any::<i32>(), any::<i32>(), -179i32..=180), 0..=MAX_MINUTIAE).prop_map(|rows| {
        let x: Vec<i32> = rows.iter().map(|r| r.0).collect();
        let y: Vec<i32> = rows.iter().map(|r| r.1).collect();
        let theta: Vec<i32> = rows.iter().map(|r| r.2).collect();
        MinutiaTemplate::from_columns(&x, &y, &theta).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_template_set(
        driver in "[a-z_]{1,12}",
        device_id in "[0-9a-f:-]{1,20}",
        device_stored in any::<bool>(),
        finger in any::<u8>(),
        username in proptest::option::of("[a-zA-Z ]{0,24}"),
        description in proptest::option::of("\\PC{0,24}"),
        julian in proptest::option::of(1i32..1_000_000),
        templates in prop::collection::vec(template(), 0..4),
    ) {
        let mut print = PrintRecord::template_set(driver.clone(), device_id.clone());
        for t in &templates {
            print.add_template(t.clone()).unwrap();
        }
        print.set_device_stored(device_stored);
        print.set_finger(Finger::from_u8(finger));
        print.set_username(username.clone());
        print.set_description(description.clone());
        let date = julian.and_then(NaiveDate::from_num_days_from_ce_opt);
        print.set_enroll_date(date);

        let bytes = print.to_bytes().unwrap();
        let decoded = PrintRecord::from_bytes(&bytes).unwrap();

        prop_assert!(decoded.equal(&print).unwrap());
        prop_assert_eq!(decoded.driver(), driver.as_str());
        prop_assert_eq!(decoded.device_id(), device_id.as_str());
        prop_assert_eq!(decoded.device_stored(), device_stored);
        prop_assert_eq!(decoded.finger().to_u8(), finger);
        prop_assert_eq!(decoded.username(), username.as_deref());
        prop_assert_eq!(decoded.description(), description.as_deref());
        prop_assert_eq!(decoded.enroll_date(), date);
        prop_assert_eq!(decoded.templates().unwrap(), templates.as_slice());
        prop_assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }
}
