pub fn größe(breite: u32, höhe: u32) -> u32 {
    breite * höhe
}
