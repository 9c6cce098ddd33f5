//! Long help text, printed by `-h` or when no file is given.

pub const HELP: &str = "\
mktartan [-b] [-x] [-s<n>] [-c] [-h] <tdf file>...

Converts .tdf (tartan definition) files into pixmap (.xpm) and bitmap
(.bmp) images. Each output file is named after its input with the
extension replaced. The options are:

  -b     Make a .bmp file only.
  -x     Make a .xpm file only.
  -s<n>  Multiply every thread count by <n>.
  -c     Weave the tartan at a 45 degree angle (cross). Doubles the
         thread counts unless -s is also given.
  -h     Print this help message and exit.

A tartan is defined by the colours and numbers of threads in its weave.
Usually only half of the warp (the lengthwise threads) needs writing
down: it is doubled by reflection, and the same pattern is used for the
weft (the crosswise threads). A .tdf file holds these lines:

#<hex colour> <letter>

  Defines the colour named by <letter> using the usual rrggbb notation,
  e.g. '#ffc800 y' for a yellow. Colours must be defined before the
  pattern line that uses them, and there may be at most 26.

r6(g10b10)k1

  A pattern line: 6 red threads, then 10 green, 10 blue and 1 black,
  given those colours are defined. Afterwards the bracketed section is
  reversed and appended, so this weaves r6 g10 b10 k1 b10 g10. A line
  may hold at most one pair of brackets.

One pattern line is used for both warp and weft. Two pattern lines give
separate warp and weft patterns; more is an error. Tartans are the same
in both directions and need one line, many tweeds need two.

Lines starting with a blank are ignored.

Example tartan, 'Mar District':

  #ffc800 y
  #000000 k
  #c80000 r
  #004c00 g

  (y1k4g32k4r1)

Example tweed, 'Kincardine Estate Tweed':

  #0000c8 b
  #00c800 g
  #c80000 r
  #b9860b n
  #8b4513 o

  b1(b1n15r1n14)n1
  g1(g1o15r1o14)o1
";
