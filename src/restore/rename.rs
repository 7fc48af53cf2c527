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

use std::collections::HashMap;

use regex::Regex;

/// Compute the restored name of every index in `indices`.
///
/// Each returned pair maps an index name from the snapshot to the name it will be restored under.
/// Every occurrence of `pattern` in a name is replaced with `replacement`, which may reference
/// capture groups as `$1`, `$2`, and so on. A name the pattern doesn't match is restored under
/// its original name. If `pattern` or `replacement` is `None`, renaming is a no-op and every
/// index keeps its name.
///
/// # Errors
/// - `Error::InvalidPattern`: `pattern` is not a valid regular expression.
/// - `Error::RenameConflict`: Two indices would be restored under the same name.
pub fn rename_indices(
    indices: &[String],
    pattern: Option<&str>,
    replacement: Option<&str>,
) -> crate::Result<Vec<(String, String)>> {
    let (pattern, replacement) = match (pattern, replacement) {
        (Some(pattern), Some(replacement)) => (pattern, replacement),
        // Renaming requires both halves; anything less keeps the original names.
        _ => {
            return Ok(indices
                .iter()
                .map(|name| (name.clone(), name.clone()))
                .collect())
        }
    };

    let matcher = Regex::new(pattern)?;
    let mut sources: HashMap<String, String> = HashMap::new();
    let mut renamed = Vec::with_capacity(indices.len());
    for name in indices {
        let target = matcher.replace_all(name, replacement).into_owned();
        if let Some(previous) = sources.insert(target.clone(), name.clone()) {
            return Err(crate::Error::RenameConflict {
                first: previous,
                second: name.clone(),
                target,
            });
        }
        renamed.push((name.clone(), target));
    }
    Ok(renamed)
}
