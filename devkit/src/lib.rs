/*!
# Healthmate DevKit - Stubs and Utilities for Development

Library easing Healthmate service development with:
- In-process HTTP stub server for tests without live endpoints
- Request recording and assertions on received calls
- Canned payload builders for the Overpass and chat-completion APIs
*/

pub mod http_stub;
pub mod payloads;

pub use http_stub::{RecordedRequest, StubRoute, StubServer};
pub use payloads::SamplePayloads;
