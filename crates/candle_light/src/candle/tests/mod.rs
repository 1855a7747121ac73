//! Controller lifecycle tests against recording fakes and the bundled asset

mod fakes;
