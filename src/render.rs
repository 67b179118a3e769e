pub(crate) mod composite;
pub(crate) mod correct;
pub(crate) mod frame;
pub(crate) mod pipeline;
pub(crate) mod screen;
pub(crate) mod synth;
