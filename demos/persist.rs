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

//! An example of persisting records to a log file in a directory of its own.

use stamplog::PersistFailure;

fn main() {
    stamplog::builder()
        .directory("logs")
        .filename("my_app.log")
        .persist_failure(PersistFailure::Exit)
        .apply();

    let path = stamplog::start_log_file().unwrap();
    println!("logging to {}", path.display());

    stamplog::simple(true);
    stamplog::message("Hello persisted message!", true);
    stamplog::complete("success", "Service is up", None, true);

    let err = std::io::Error::other("disk almost full");
    stamplog::fault("warning", Some(&err), true);
}
