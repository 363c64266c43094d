pub fn grade(score: u32, bonus: bool, late: bool) -> char {
    let mut total = score;
    if bonus && !late {
        total += 5;
    }
    if late || total > 100 {
        total = total.min(100);
    }
    match total {
        90..=100 => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}
