use super::*;

#[test]
fn passes_result_through() {
    let result: Result<u8, &str> = guarded(|| Ok(7));
    assert_eq!(result, Ok(7));
}

#[test]
fn nested_blocks_deeper_than_default_stack() {
    // Mimics a parser descending into one nested block per level.
    fn nest(depth: u32) -> u32 {
        guarded(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    assert_eq!(nest(200_000), 200_000);
}
