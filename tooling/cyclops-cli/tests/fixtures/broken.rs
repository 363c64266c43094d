pub fn unfinished(a: u32 -> {
