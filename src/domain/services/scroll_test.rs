use super::Scroll;

#[test]
fn it_pages_by_one_viewport_height() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 10);

    scroll.down_page();
    assert_eq!(scroll.position, 10);

    scroll.down_page();
    assert_eq!(scroll.position, 20);

    scroll.up_page();
    assert_eq!(scroll.position, 10);
}

#[test]
fn it_clamps_paging_to_the_content() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 10);

    scroll.last();
    assert_eq!(scroll.position, 40);

    scroll.down_page();
    assert_eq!(scroll.position, 40);

    scroll.set_state(5, 10);
    scroll.position = 0;
    scroll.down_page();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_steps_by_one_line_before_any_layout_pass() {
    let mut scroll = Scroll::default();

    scroll.up_page();
    assert_eq!(scroll.position, 0);

    scroll.up();
    assert_eq!(scroll.position, 0);
}
