#[derive(Clone, Debug, Default)]
pub struct Config {
    pub show_all: bool,
}
