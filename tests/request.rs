/*
 * Copyright 2021 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use common::*;
use maplit::hashmap;
use serde_json::json;
use snap_restore::restore::{IndicesOptions, RestoreRequest};
use snap_restore::settings::Settings;
use snap_restore::Error;

mod common;

#[test]
fn new_requests_are_empty_and_lenient() {
    let request = RestoreRequest::new();

    assert_that!(request.repository()).is_equal_to("");
    assert_that!(request.snapshot()).is_equal_to("");
    assert_that!(request.indices().is_empty()).is_true();
    assert_that!(request.indices_options()).is_equal_to(IndicesOptions::lenient());
    assert_that!(request.rename_pattern()).is_none();
    assert_that!(request.rename_replacement()).is_none();
    assert_that!(request.settings().is_empty()).is_true();
    assert_that!(request.wait_for_completion()).is_false();
    assert_that!(request.restore_global_state()).is_false();
}

#[test]
fn with_snapshot_seeds_the_names() {
    let request = RestoreRequest::with_snapshot("backups", "nightly");

    assert_that!(request.repository()).is_equal_to("backups");
    assert_that!(request.snapshot()).is_equal_to("nightly");
}

#[test]
fn mutators_chain_and_overwrite() {
    let mut request = RestoreRequest::new();
    request
        .set_repository("old")
        .set_repository("backups")
        .set_indices(["a", "b"])
        .set_indices(["c"])
        .set_wait_for_completion(true);

    assert_that!(request.repository()).is_equal_to("backups");
    assert_eq!(request.indices(), ["c"]);
    assert_that!(request.wait_for_completion()).is_true();
}

#[test]
fn index_patterns_keep_their_order() {
    let mut request = RestoreRequest::new();
    request.set_indices(["-logs-2020*", "+logs-2020-01", "metrics-*"]);

    assert_eq!(
        request.indices(),
        ["-logs-2020*", "+logs-2020-01", "metrics-*"]
    );
}

#[test]
fn one_sided_rename_builds_fine() {
    let mut request = RestoreRequest::new();
    request.set_rename_pattern("logs-(.+)");

    assert_that!(request.rename_pattern()).is_equal_to(Some("logs-(.+)"));
    assert_that!(request.rename_replacement()).is_none();
}

#[test]
fn invalid_rename_pattern_is_not_rejected() {
    let mut request = RestoreRequest::new();
    request.set_rename_pattern("logs-(");

    assert_that!(request.rename_pattern()).is_equal_to(Some("logs-("));
}

#[test]
fn set_settings_accepts_every_source_form() -> anyhow::Result<()> {
    let mut builder = Settings::builder();
    builder.put("index.number_of_replicas", 0);

    let mut request = RestoreRequest::new();

    request.set_settings(builder.build())?;
    let from_object = request.settings().clone();

    request.set_settings(builder)?;
    let from_builder = request.settings().clone();

    request.set_settings(r#"{"index": {"number_of_replicas": 0}}"#)?;
    let from_text = request.settings().clone();

    request.set_settings(hashmap! {
        String::from("index.number_of_replicas") => json!(0),
    })?;
    let from_map = request.settings().clone();

    assert_that!(from_builder).is_equal_to(&from_object);
    assert_that!(from_text).is_equal_to(&from_object);
    assert_that!(from_map).is_equal_to(&from_object);

    Ok(())
}

#[test]
fn set_settings_replaces_wholesale() -> anyhow::Result<()> {
    let mut request = RestoreRequest::new();
    request.set_settings("index.number_of_replicas=1")?;
    request.set_settings("index.refresh_interval=30s")?;

    assert_that!(request.settings().contains("index.number_of_replicas")).is_false();
    assert_that!(request.settings().get("index.refresh_interval")).is_equal_to(Some("30s"));

    Ok(())
}

#[test]
fn failed_set_settings_keeps_the_previous_settings() -> anyhow::Result<()> {
    let mut request = RestoreRequest::new();
    request.set_settings("index.codec=default")?;

    assert_that!(request.set_settings(r#"{"index": {"#))
        .is_err_variant(Error::ParseSettings(String::new()));

    assert_that!(request.settings().get("index.codec")).is_equal_to(Some("default"));

    Ok(())
}

#[test]
fn validate_requires_repository_and_snapshot() {
    let mut request = RestoreRequest::new();
    assert_that!(request.validate()).is_err_variant(Error::MissingRepository);

    request.set_repository("backups");
    assert_that!(request.validate()).is_err_variant(Error::MissingSnapshot);

    request.set_snapshot("nightly");
    assert_that!(request.validate()).is_ok();
}

#[test]
fn empty_names_do_not_validate() {
    let mut request = RestoreRequest::with_snapshot("backups", "nightly");
    request.set_snapshot("");

    assert_that!(request.validate()).is_err_variant(Error::MissingSnapshot);
}

#[test]
fn strict_options_have_no_flags_set() {
    assert_that!(IndicesOptions::strict().is_empty()).is_true();
    assert_that!(IndicesOptions::lenient().contains(IndicesOptions::IGNORE_UNAVAILABLE)).is_true();
    assert_that!(IndicesOptions::lenient().contains(IndicesOptions::ALLOW_NO_INDICES)).is_true();
    assert_that!(IndicesOptions::default()).is_equal_to(IndicesOptions::lenient());
}
