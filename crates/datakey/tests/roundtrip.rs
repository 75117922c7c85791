//! Property tests for the round-trip and ordering laws.

use proptest::prelude::*;

use datakey::{DataCategory, DataPeriod, DataRun, ExpSetup, FileKey, Timestamp};

/// Epoch upper bound keeping generated dates to 4-digit years (2100-01-01).
const EPOCH_MAX: i64 = 4_102_444_800;

fn canonical_key(setup: &str, period: u16, run: u16, category: &str, epoch: i64) -> String {
    format!(
        "{}-p{:02}-r{:03}-{}-{}",
        setup,
        period,
        run,
        category,
        Timestamp::new(epoch)
    )
}

proptest! {
    #[test]
    fn file_key_print_parse_is_identity(
        setup in "[a-z][a-z0-9]{2,7}",
        period in 0u16..100,
        run in 0u16..1000,
        category in "[a-z]{3,6}",
        epoch in 0i64..EPOCH_MAX,
    ) {
        let canonical = canonical_key(&setup, period, run, &category, epoch);
        let key: FileKey = canonical.parse().unwrap();
        prop_assert_eq!(key.to_string(), canonical);
    }

    #[test]
    fn file_key_suffix_is_dropped(
        setup in "[a-z][a-z0-9]{2,7}",
        period in 0u16..100,
        run in 0u16..1000,
        category in "[a-z]{3,6}",
        epoch in 0i64..EPOCH_MAX,
        suffix in "(-[a-z_0-9]+)?\\.[a-z0-9]{1,4}",
    ) {
        let canonical = canonical_key(&setup, period, run, &category, epoch);
        let key: FileKey = format!("{}{}", canonical, suffix).parse().unwrap();
        prop_assert_eq!(key.to_string(), canonical);
    }

    #[test]
    fn leaf_print_parse_is_identity(
        setup in "[a-z][a-z0-9]{2,7}",
        period in 0u16..100,
        run in 0u16..1000,
        category in "[a-z]{3,6}",
        epoch in 0i64..EPOCH_MAX,
    ) {
        let s: ExpSetup = setup.parse().unwrap();
        prop_assert_eq!(s.to_string(), setup);

        let p = DataPeriod::new(period);
        prop_assert_eq!(p.to_string().parse::<DataPeriod>().unwrap(), p);

        let r = DataRun::new(run);
        prop_assert_eq!(r.to_string().parse::<DataRun>().unwrap(), r);

        let c: DataCategory = category.parse().unwrap();
        prop_assert_eq!(c.to_string(), category);

        let t = Timestamp::new(epoch);
        prop_assert_eq!(t.to_string().parse::<Timestamp>().unwrap(), t);
    }

    #[test]
    fn file_key_order_matches_field_tuple_order(
        a in key_strategy(),
        b in key_strategy(),
    ) {
        let tuple = |k: &FileKey| {
            (
                k.setup().as_str().to_string(),
                k.period().get(),
                k.run().get(),
                k.category().as_str().to_string(),
                k.timestamp().epoch_seconds(),
            )
        };
        prop_assert_eq!(a.cmp(&b), tuple(&a).cmp(&tuple(&b)));
    }
}

fn key_strategy() -> impl Strategy<Value = FileKey> {
    (
        "[a-z][a-z0-9]{2,7}",
        0u16..100,
        0u16..1000,
        "[a-z]{3,6}",
        0i64..EPOCH_MAX,
    )
        .prop_map(|(setup, period, run, category, epoch)| {
            FileKey::new(
                ExpSetup::new(setup),
                DataPeriod::new(period),
                DataRun::new(run),
                DataCategory::new(category),
                Timestamp::new(epoch),
            )
        })
}
