//! Tests for ozinfo-model types.

use proptest::prelude::*;

use ozinfo_model::{
    DataType, DiagnosticDocument, Entry, GenerateOptions, Loop, OzinfoTable, TOTAL_COLUMN_LAYER,
    Variable,
};

#[test]
fn data_type_selection() {
    assert_eq!(DataType::select(Variable::Obs, Loop::Ges), DataType::Observation);
    assert_eq!(DataType::select(Variable::Obs, Loop::Anl), DataType::Observation);
    assert_eq!(DataType::select(Variable::Hofx, Loop::Anl), DataType::Hofx);
    assert_eq!(DataType::select(Variable::Omf, Loop::Anl), DataType::Oma);
    assert_eq!(DataType::select(Variable::Omf, Loop::Ges), DataType::Omf);
}

#[test]
fn options_defaults_match_cli_defaults() {
    let options = GenerateOptions::new("diags", "2021010100", "ozinfo.txt", "out/");
    assert_eq!(options.outer_loop, Loop::Ges);
    assert_eq!(options.variable, Variable::Omf);
    assert!(!options.monitor);
    assert_eq!(options.data_type(), DataType::Omf);

    let options = options.with_loop(Loop::Anl).with_monitor(true);
    assert_eq!(options.data_type(), DataType::Oma);
    assert!(options.monitor);
}

#[test]
fn document_serializes_with_spaced_keys() {
    let mut document = DiagnosticDocument::new("diags/diag_omi_aura_ges.2021010100.nc4", DataType::Omf);
    document.push_layer(0);

    let yaml = serde_yaml::to_string(&document).expect("serialize document");
    assert!(yaml.contains("data type: omf"));
    assert!(yaml.contains("bias correction:"));

    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("parse yaml");
    let layer = &value["diagnostic"]["ozone"][0];
    assert_eq!(layer["layer"][0].as_i64(), Some(0));
    assert_eq!(layer["bias correction"][0].as_bool(), Some(true));

    let keys: Vec<&str> = value["diagnostic"]
        .as_mapping()
        .expect("diagnostic mapping")
        .keys()
        .filter_map(serde_yaml::Value::as_str)
        .collect();
    assert_eq!(keys, vec!["path", "data type", "ozone"]);
}

fn entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        ("[a-c]", 0i32..30, prop::sample::select(vec![1, -1])),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(sensor, layer, usage)| Entry::new(sensor, layer, usage))
            .collect()
    })
}

proptest! {
    #[test]
    fn parallel_views_have_equal_length(rows in entries()) {
        let table = OzinfoTable::normalized(rows);
        prop_assert_eq!(table.sensors().len(), table.layers().len());
        prop_assert_eq!(table.layers().len(), table.usages().len());
    }

    #[test]
    fn normalization_zeroes_exactly_non_increasing_predecessors(rows in entries()) {
        let raw: Vec<i32> = rows.iter().map(|e| e.layer).collect();
        let table = OzinfoTable::normalized(rows);
        let layers = table.layers();
        for i in 0..raw.len() {
            let expected = match raw.get(i + 1) {
                Some(next) if *next <= raw[i] => TOTAL_COLUMN_LAYER,
                _ => raw[i],
            };
            prop_assert_eq!(layers[i], expected);
        }
    }
}
