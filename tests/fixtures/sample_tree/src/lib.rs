pub mod util;

pub fn answer() -> u32 {
    util::double(21)
}
