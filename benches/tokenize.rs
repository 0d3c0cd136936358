use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glint::format::{AnsiTheme, highlight_with_theme};
use glint::tokenizer::tokenize;

const PY_SNIPPET: &str = r#"
@lru_cache
def fib(n):
    # naive but cached
    if n < 2:
        return n
    return fib(n - 1) + fib(n - 2)

print(fib(30))
"#;

const GO_SNIPPET: &str = r#"
func worker(jobs chan int, results chan int) {
    for j := range jobs {
        // simulate work
        results <- j * 2
    }
}

func main() {
    jobs := make(chan int, 100)
    fmt.Println("started", len(jobs))
}
"#;

const TSX_SNIPPET: &str = r#"
const Card = ({ title, count }: CardProps) => {
  const label = `${title}: ${count}`
  /* badge row */
  return <div className="card"><Badge text={label} /></div>
}

export default Card
"#;

const PLAIN_WORST_CASE: &str = "~~~ ??? !!! ~~~ ??? !!! ~~~ ??? !!! ~~~ ??? !!!";

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for (name, src, lang) in [
        ("python", PY_SNIPPET, "py"),
        ("go", GO_SNIPPET, "go"),
        ("tsx", TSX_SNIPPET, "tsx"),
        ("plain_fallback", PLAIN_WORST_CASE, "txt"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| tokenize(black_box(src), black_box(lang)))
        });
    }
    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let theme = AnsiTheme::dark();
    let mut group = c.benchmark_group("highlight");
    for (name, src, lang) in [
        ("python", PY_SNIPPET, "py"),
        ("go", GO_SNIPPET, "go"),
        ("tsx", TSX_SNIPPET, "tsx"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| highlight_with_theme(black_box(src), black_box(lang), &theme, true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_highlight);
criterion_main!(benches);
