//! Coordinates Demo - Element Geometry Without a Browser
//!
//! Demonstrates the ubicar resolver against a scripted mock session:
//! sub-pixel rounding, scroll behavior, and frame composition.
//!
//! # Running
//!
//! ```bash
//! cargo run --example coordinates_demo -p ubicar
//! ```

use ubicar::prelude::*;

fn main() -> UbicarResult<()> {
    println!("=== Ubicar Coordinates Demo ===\n");

    // Demo 1: Sub-pixel rounding
    demo_subpixel_rounding()?;

    // Demo 2: Scrolling
    demo_scrolling()?;

    // Demo 3: Frame composition
    demo_frames()?;

    println!("\n=== Coordinates Demo Complete ===");
    Ok(())
}

fn demo_subpixel_rounding() -> UbicarResult<()> {
    println!("--- Demo 1: Sub-Pixel Rounding ---\n");

    let page = MockDocument::new().with_element(
        MockElement::new("r2")
            .with_rect(RawRect::new(10.9, 10.1, 48.7, 49.3))
            .with_style("left", "10.9px")
            .with_style("top", "10.1px"),
    );
    let mut session = MockSession::new().with_page("https://demo.test/rectangles.html", page);
    session.navigate("https://demo.test/rectangles.html")?;

    let element = session.find_element(&Selector::id("r2"))?;
    let resolver = CoordinateResolver::new();

    let coords = resolver.resolve(&session, &element, &FrameContext::top())?;
    let size = resolver.element_size(&session, &element)?;
    println!("Raw box: left=10.9 top=10.1 width=48.7 height=49.3");
    println!("  Document position: {}", coords.document);
    println!("  Size: {size}");

    let left: PixelLength = session.computed_style(&element, "left")?.parse()?;
    println!("  Declared CSS left {left} rounds to {}", left.rounded());

    println!();
    Ok(())
}

fn demo_scrolling() -> UbicarResult<()> {
    println!("--- Demo 2: Scrolling ---\n");

    let page = MockDocument::new()
        .with_element(MockElement::new("bottom").with_rect(RawRect::new(10.0, 5010.0, 100.0, 50.0)));
    let mut session = MockSession::new().with_page("https://demo.test/tall.html", page);
    session.navigate("https://demo.test/tall.html")?;

    let element = session.find_element(&Selector::id("bottom"))?;
    let resolver = CoordinateResolver::new();
    let ctx = FrameContext::top();

    let at_top = resolver.resolve(&session, &element, &ctx)?;
    println!("Before scrolling:");
    println!("  document {}  viewport {:?}", at_top.document, at_top.viewport);

    session.set_scroll(RawPoint::new(0.0, 4000.0))?;
    let scrolled = resolver.resolve(&session, &element, &ctx)?;
    println!("After scrolling to y=4000:");
    println!(
        "  document {} (unchanged)  viewport {:?}",
        scrolled.document, scrolled.viewport
    );

    println!();
    Ok(())
}

fn demo_frames() -> UbicarResult<()> {
    println!("--- Demo 3: Frame Composition ---\n");

    let inner = MockFrame::new("ifr", RawRect::new(15.0, 15.0, 300.0, 300.0)).with_document(
        MockDocument::new().with_element(
            MockElement::new("box").with_rect(RawRect::new(10.0, 10.0, 100.0, 100.0)),
        ),
    );
    let page = MockDocument::new().with_frame(
        MockFrame::new("ifr", RawRect::new(15.0, 15.0, 400.0, 400.0))
            .with_document(MockDocument::new().with_frame(inner)),
    );
    let mut session = MockSession::new().with_page("https://demo.test/nested.html", page);
    session.navigate("https://demo.test/nested.html")?;

    session.switch_to_frame(&FrameId::name("ifr"))?;
    session.switch_to_frame(&FrameId::name("ifr"))?;
    let element = session.find_element(&Selector::id("box"))?;
    let ctx = FrameContext::top()
        .with_frame(FrameId::name("ifr"))
        .with_frame(FrameId::name("ifr"));

    let coords = CoordinateResolver::new().resolve(&session, &element, &ctx)?;
    println!("Element at (10, 10) inside two frames at (15, 15) each:");
    println!("  Document position: {}", coords.document);
    println!("  Viewport position: {:?}", coords.viewport);

    if let Err(err) = CoordinateResolver::new().viewport_position(&session, &element, &ctx) {
        println!("  viewport_position: {err}");
    }

    println!();
    Ok(())
}
