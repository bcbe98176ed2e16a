//! Property tests for the encode/decode round trip.

use openfret::prelude::*;
use proptest::prelude::*;
use serde_json::Value;

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

/// Arbitrary JSON value with bounded nesting depth
fn arb_json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        finite_f64().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_metadata() -> impl Strategy<Value = Metadata> {
    prop::collection::btree_map("[a-z_]{1,8}", arb_json_value(), 0..4).prop_map(|map| {
        Metadata::from(map.into_iter().collect::<serde_json::Map<String, Value>>())
    })
}

fn arb_channel() -> impl Strategy<Value = Channel> {
    (
        "[a-z]{1,10}",
        prop::collection::vec(finite_f64(), 0..30),
        prop::option::of(finite_f64()),
        prop::option::of(finite_f64()),
        prop::option::of(finite_f64()),
        arb_metadata(),
    )
        .prop_map(
            |(channel_type, data, excitation, emission, exposure, metadata)| Channel {
                channel_type,
                data,
                excitation_wavelength: excitation,
                emission_wavelength: emission,
                exposure_time: exposure,
                metadata,
            },
        )
}

fn arb_trace() -> impl Strategy<Value = Trace> {
    (prop::collection::vec(arb_channel(), 0..3), arb_metadata())
        .prop_map(|(channels, metadata)| Trace { channels, metadata })
}

fn arb_sample_details() -> impl Strategy<Value = SampleDetails> {
    (prop::option::of("[ -~]{0,20}"), arb_metadata()).prop_map(
        |(buffer_conditions, other_details)| SampleDetails {
            buffer_conditions,
            other_details,
        },
    )
}

fn arb_instrument_details() -> impl Strategy<Value = InstrumentDetails> {
    (
        prop::option::of("[ -~]{0,20}"),
        prop::option::of("[ -~]{0,20}"),
        prop::option::of("[ -~]{0,20}"),
        arb_metadata(),
    )
        .prop_map(|(microscope, laser, detector, other_details)| InstrumentDetails {
            microscope,
            laser,
            detector,
            other_details,
        })
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    (
        (
            "[ -~]{1,20}",
            prop::option::of("[ -~]{0,30}"),
            prop::option::of("[ -~]{0,20}"),
            prop::option::of(prop::collection::vec("[ -~]{1,15}", 0..4)),
            prop::option::of("[ -~]{0,20}"),
            prop::option::of("[0-9]{4}-[0-9]{2}-[0-9]{2}"),
        ),
        (
            prop::collection::vec(arb_trace(), 0..3),
            arb_metadata(),
            arb_sample_details(),
            arb_instrument_details(),
        ),
    )
        .prop_map(
            |(
                (title, description, experiment_type, authors, institution, date),
                (traces, metadata, sample_details, instrument_details),
            )| Dataset {
                title,
                description,
                experiment_type,
                authors,
                institution,
                date,
                traces,
                metadata,
                sample_details,
                instrument_details,
            },
        )
}

proptest! {
    /// Any dataset survives encode → decode unchanged.
    #[test]
    fn dataset_roundtrips_through_values(dataset in arb_dataset()) {
        let value = dataset.encode();
        let restored = Dataset::decode(&value).unwrap();
        prop_assert_eq!(restored, dataset);
    }

    /// Round trips are stable through serialized JSON text as well.
    #[test]
    fn dataset_roundtrips_through_text(dataset in arb_dataset()) {
        let text = serde_json::to_string(&dataset.encode()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let restored = Dataset::decode(&value).unwrap();
        prop_assert_eq!(restored, dataset);
    }

    /// Unset optional members produce no JSON member, and re-encoding the
    /// decoded channel reproduces the value exactly.
    #[test]
    fn unset_members_are_omitted(data in prop::collection::vec(finite_f64(), 0..10)) {
        let channel = Channel::new("donor", data);
        let value = channel.encode();
        let obj = value.as_object().unwrap();
        prop_assert!(!obj.contains_key("excitation_wavelength"));
        prop_assert!(!obj.contains_key("emission_wavelength"));
        prop_assert!(!obj.contains_key("exposure_time"));

        let restored = Channel::decode(&value).unwrap();
        prop_assert_eq!(restored.excitation_wavelength, None);
        prop_assert_eq!(restored.encode(), value);
    }

    /// Metadata value trees survive the round trip exactly.
    #[test]
    fn metadata_roundtrips(metadata in arb_metadata()) {
        let restored = Metadata::decode(&metadata.encode()).unwrap();
        prop_assert_eq!(restored, metadata);
    }
}
