//! Line diff for `ModelVersionDiff` (`spec.md` §4.4, scenario S6): the
//! greedy LCS approximation the spec spells out verbatim — walk both files
//! in parallel; equal lines emit `"  line"`; on a mismatch, scan forward in
//! the target for the next occurrence of the current source line (the
//! intervening target lines are `"+ line"` additions), or if not found
//! emit `"- line"` and advance the source. Whichever side runs out first,
//! the other's remaining lines become a pure `+`/`-` tail. Deterministic,
//! not minimal.

pub fn diff_lines(old: &str, new: &str) -> String {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let mut out = String::new();
    let (mut i, mut j) = (0usize, 0usize);

    while i < old_lines.len() && j < new_lines.len() {
        if old_lines[i] == new_lines[j] {
            out.push_str("  ");
            out.push_str(old_lines[i]);
            out.push('\n');
            i += 1;
            j += 1;
            continue;
        }

        match new_lines[j..].iter().position(|&line| line == old_lines[i]) {
            Some(offset) => {
                for added in &new_lines[j..j + offset] {
                    out.push_str("+ ");
                    out.push_str(added);
                    out.push('\n');
                }
                j += offset;
            }
            None => {
                out.push_str("- ");
                out.push_str(old_lines[i]);
                out.push('\n');
                i += 1;
            }
        }
    }

    for removed in &old_lines[i..] {
        out.push_str("- ");
        out.push_str(removed);
        out.push('\n');
    }
    for added in &new_lines[j..] {
        out.push_str("+ ");
        out.push_str(added);
        out.push('\n');
    }

    out.strip_suffix('\n').unwrap_or(&out).to_string()
}
