// SPDX-License-Identifier: Apache-2.0

pub(crate) mod content;
pub(crate) mod handlers_utilities;
pub(crate) mod pages;
pub(crate) mod redirects;
pub(crate) mod request_tracing;
pub(crate) mod schema;
pub(crate) mod telemetry;
