//! ASCII-art reaction catalog.
//!
//! A fixed set of named multi-line text blocks, looked up by name
//! (case-insensitively) and never mutated at runtime.

/// Immutable name -> text catalog of ASCII-art reactions.
#[derive(Debug, Clone, Copy)]
pub struct ArtCatalog;

/// The catalog entries, in listing order.
const ENTRIES: &[(&str, &str)] = &[
    (
        "THUMBS_UP",
        r#"    _
   /(|
  (  :
 __\  \  _____
(____)  `|
(____)|   |
 (____).__|
  (___)__.|_____
"#,
    ),
    (
        "SNOOPY",
        r#"
  ,-~~-.___.
 / |  '     \
(  )         0
 \_/-, ,----'
    ====
   /  \-'~;    /~~~(O)
  /  __/~|   /       |
=(  _____| (_________|
"#,
    ),
    (
        "HEARTS",
        r#"
    ,-"-,-"-.
   (         )
    ".     ."
      "._.      _  _
               ( `' )
                `.,'
,-.-.
`. ,'
  `
"#,
    ),
    (
        "SMILE",
        r#"     ..:=*#*=-..
  ..=@#-.   .:#@+..
 .=%=.         .=%=.
.=#. .:=:. .:=:. .#+.
:#-. .=@=. .=@+. .:#-
-#:               :#=
:#-. :.       .:..:#-
.+#. -#*:...:+#-..#+.
 .=%=..:=+++=:..=%=.
  ..+@#-.   .:*@+..
     ..-+###+-..
"#,
    ),
    (
        "SAD",
        r#"        ..:---:..
     .=%@%*+=+*%@%=.
  ..#@#.         .#@#..
 .-%#. ...     ... .#%-.
.:%*.  :@%-   :%@-. .*%:.
.+%-   .::.   ..:.   -%+.
.*#:                 .#*.
.+%-   .=%@%%%@%=..  -%+.
.:%*.  #*:.   .:*#. .+%:.
 .-%#.             .#%-.
  ..#@#.         .#@#..
     .=@@%*===*%@@=.
        ..:---:..
"#,
    ),
];

impl ArtCatalog {
    /// Case-insensitive lookup by entry name. Returns the canonical name
    /// and the art text.
    pub fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
        ENTRIES
            .iter()
            .copied()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// All entries, in listing order.
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        ENTRIES.iter().copied()
    }
}
