//! Shell-scripted games shared by the integration tests

#![allow(dead_code)]

use hangman_marker::transport::GameCommand;

/// A working hangman game: `$1` is the hidden word, six wrong guesses lose
pub const HANGMAN: &str = r#"
word=$1
guessed=""
lives=6
mask() {
    m=""
    i=1
    while [ "$i" -le "${#word}" ]; do
        c=$(printf '%s' "$word" | cut -c"$i")
        case "$guessed" in
            *"$c"*) m="$m$c" ;;
            *) m="$m*" ;;
        esac
        i=$((i + 1))
    done
    printf '%s' "$m"
}
while :; do
    m=$(mask)
    case "$m" in
        *'*'*) ;;
        *) printf 'The word was %s\nCongratulations you win!\n' "$word"; exit 0 ;;
    esac
    if [ "$lives" -le 0 ]; then
        printf 'You lose! The word was %s\n' "$word"
        exit 0
    fi
    printf 'Lives left: %s\n%s\nPlease enter your next guess: ' "$lives" "$m"
    read -r g || exit 1
    guessed="$guessed$g"
    case "$word" in
        *"$g"*) ;;
        *) lives=$((lives - 1)) ;;
    esac
done
"#;

/// Run an inline shell script as the game
pub fn shell(script: &str) -> GameCommand {
    GameCommand::new("sh").arg("-c").arg(script)
}

/// The working hangman game with a fixed hidden word
pub fn hangman(word: &str) -> GameCommand {
    GameCommand::new("sh")
        .arg("-c")
        .arg(HANGMAN)
        .arg("hangman")
        .arg(word)
}
