// Plugin crates register through inventory, which only sees crates that are
// actually linked. Every plugin crate the host should discover is listed here.
#![allow(unused_imports)]

use moped_sample_plugins as _;
