//! Embedded content.

use crate::setters::{flag_setters, value_setters};
use htmlgen_core::{define_element, impl_container_widget};

define_element!(
    /// An image. Has no closing tag.
    Img => Img, void, line
);
define_element!(Video => Video, block);
define_element!(Audio => Audio, block);
define_element!(Source => Source, leaf, void);
define_element!(
    /// Timed text for a [`Video`] or [`Audio`]. Void, and never holds children.
    Track => Track, leaf, void
);
define_element!(
    /// Art-directed image: [`Source`] candidates followed by a fallback [`Img`].
    Picture => Picture, block
);
define_element!(Iframe => Iframe, line);
define_element!(Canvas => Canvas, line);

impl_container_widget!(Video, Audio, Picture, Iframe, Canvas);

value_setters!(Img {
    /// `lazy` or `eager`.
    loading => "loading",
    decoding => "decoding",
});

value_setters!(Video {
    poster => "poster",
    preload => "preload",
});
flag_setters!(Video {
    controls => "controls",
    autoplay => "autoplay",
    loop_ => "loop",
    muted => "muted",
    playsinline => "playsinline",
});

value_setters!(Audio {
    preload => "preload",
});
flag_setters!(Audio {
    controls => "controls",
    autoplay => "autoplay",
    loop_ => "loop",
    muted => "muted",
});

value_setters!(Source {
    media => "media",
    srcset => "srcset",
    sizes => "sizes",
});

value_setters!(Track {
    /// `subtitles`, `captions`, `descriptions`, `chapters` or `metadata`.
    kind_ => "kind",
    srclang => "srclang",
    label => "label",
});
flag_setters!(Track {
    default_ => "default",
});

value_setters!(Iframe {
    sandbox => "sandbox",
    allow => "allow",
    loading => "loading",
    name => "name",
    srcdoc => "srcdoc",
    referrerpolicy => "referrerpolicy",
});
