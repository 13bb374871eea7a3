// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An example of every status class. The last call exits the process.

use std::panic::AssertUnwindSafe;

fn main() {
    stamplog::simple(false);
    stamplog::message("The subject is alive", false);

    stamplog::status("success", false);
    stamplog::status("Info", false);
    stamplog::status("WARNING", false);
    stamplog::status("unknown", false);

    let err = std::io::Error::other("the subject is not responding");
    stamplog::fault("error", Some(&err), false);

    let caught = std::panic::catch_unwind(AssertUnwindSafe(|| {
        stamplog::complete("panic", "the subject panicked", Some(&err), false);
    }));
    assert!(caught.is_err());

    stamplog::complete("fatal", "the subject is not alive anymore", Some(&err), false);
}
