// src/showcase.rs

//! The stock five-face menu: index, about, loop, resources and assets.

use crate::audio::AudioCues;
use crate::cube::Cube;
use crate::direction::Direction;
use crate::error::CubeError;
use crate::face::Align;
use crate::surface::Surface;
use crate::timer::Scheduler;

/// Face names in the order they are added.
pub const FACES: [&str; 5] = ["index", "about", "loop", "resources", "assets"];

/// Adds the stock faces to an empty cube and flushes them to the surface.
pub fn build<V: Surface, A: AudioCues, S: Scheduler>(
    cube: &mut Cube<V, A, S>,
) -> Result<(), CubeError> {
    cube.add_side("index", None, true)?
        .add_text("Riddick game cube menu navigation in HTML, CSS, and JavaScript")
        .new_line(2)
        .add_text("As of April 2013 works best in Google Chrome")
        .new_line(3)
        .add_link("#!about", "About", Some(Align::Center))
        .new_line(2)
        .add_link("#!resources", "Resources", Some(Align::Center))
        .new_line(2)
        .add_link("#!assets", "Assets", Some(Align::Center));

    cube.add_side("about", None, false)?
        .add_title("About")
        .add_text("One side consists of 2000 elements")
        .new_line(2)
        .add_text("Animations are 100% CSS and done by adding and removing classes")
        .new_line(2)
        .add_text("Framework supports infinite number of sides")
        .new_line(2)
        .add_text("Try the looping navigation below")
        .new_line(2)
        .add_link("#!loop", "Loop", Some(Align::Center));

    cube.add_side("loop", None, false)?
        .add_title("Loop")
        .add_text("Clicking on Loop link below cycles through About and Loop sections, always animating in from the right side")
        .new_line(2)
        .add_text("This showcases the infinite sides design")
        .new_line(5)
        .add_link("#!about", "Loop", Some(Align::Center));

    let resources = cube.add_side("resources", Some(Direction::Top), false)?;
    resources.add_title("Resources");
    for (url, title, note) in [
        ("http://jquery.com", "jQuery", "-DOM manipulations"),
        ("http://modernizr.com", "Modernizr", "-feature detects"),
        ("https://github.com/LeaVerou/prefixfree", "PrefixFree", "-vendor prefixes"),
        ("https://github.com/goldfire/howler.js", "Howler", "-sound effects"),
        ("https://github.com/Darsain/motio", "Motio", "-sprite animations"),
    ] {
        resources
            .add_link(url, title, None)
            .new_line(1)
            .add_text(note)
            .new_line(2);
    }

    cube.add_side("assets", Some(Direction::Bottom), false)?
        .add_title("Assets")
        .add_text("Sound effects are taken from Riddick: Assault on Dark Athena. Buy it!")
        .new_line(2)
        .add_text("-")
        .add_link("http://atari.com/buy-games/fps/chronicles-riddick-assault-dark-athena", "Atari.com", None)
        .new_line(1)
        .add_text("-")
        .add_link("http://www.gog.com/gamecard/the_chronicles_of_riddick_assault_on_dark_athena", "GOG.com", None)
        .new_line(2)
        .add_text("Background image is from EVE Online")
        .new_line(2)
        .add_text("-")
        .add_link("http://www.eveonline.com/", "EVEOnline.com", None)
        .new_line(2)
        .add_text("Please dont sue me anyone\u{263a}");

    cube.flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::config::Config;
    use crate::link::LinkTarget;
    use crate::surface::NullSurface;

    fn showcase() -> Cube<NullSurface, SilentAudio> {
        let mut cube = Cube::new(Config::default(), NullSurface, SilentAudio);
        build(&mut cube).unwrap();
        cube
    }

    #[test]
    fn builds_every_face() {
        let cube = showcase();
        let names: Vec<&str> = cube.faces().map(|f| f.name()).collect();
        assert_eq!(names, FACES);
        assert_eq!(cube.active(), Some("index"));
    }

    #[test]
    fn index_links_are_centered() {
        let cube = showcase();
        let index = cube.side("index").unwrap();
        let titles: Vec<(&str, usize)> = index
            .links()
            .iter()
            .map(|l| (l.title.as_str(), l.cells[0].1))
            .collect();
        assert_eq!(titles, vec![("About", 7), ("Resources", 5), ("Assets", 7)]);
        assert_eq!(index.links()[0].target, LinkTarget::Face("about".into()));
    }

    #[test]
    fn internal_links_name_existing_faces() {
        let cube = showcase();
        for face in cube.faces() {
            for link in face.links() {
                if let LinkTarget::Face(name) = &link.target {
                    assert!(cube.side(name).is_some(), "dangling link to {}", name);
                }
            }
        }
    }

    #[test]
    fn content_stays_inside_the_grid() {
        let cube = showcase();
        let n = cube.geometry().cubes_per_side;
        for face in cube.faces() {
            assert!(face.cursor().y < n, "face {} overflowed", face.name());
        }
    }
}
