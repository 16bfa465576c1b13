use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loxscript_scanner::Scanner;

// A medium-size loxscript source with various constructs
const LOXSCRIPT_SOURCE: &str = r#"
// geometry helpers
class Point [
    init(x, y) [
        this.x = x;
        this.y = y;
    ]

    length() [
        return (this.x * this.x + this.y * this.y) / 1;
    ]
]

fun clamp(value, low, high) [
    if (value < low) return low;
    if (value > high) return high;
    return value;
]

/* walk a grid and accumulate
   a weighted total */
fun sweep(width, height) [
    var total = 0;
    for (var y = 0; y < height; y = y + 1) [
        for (var x = 0; x < width; x = x + 1) [
            if (x != y and x >= 1) [
                total = total + x * 0.5;
            ] else [
                total = total - 1;
            ]
        ]
    ]
    return total;
]

var banner = "loxscript benchmark";
var alt = 'single quotes work too';
var limit = clamp(12.75, 0, 100);
print banner;
print sweep(80, 25) <= limit or limit == 100;
"#;

fn bench_scan_loxscript(c: &mut Criterion) {
    c.bench_function("scan_loxscript_medium", |b| {
        b.iter(|| {
            let scanner = Scanner::new(black_box(LOXSCRIPT_SOURCE));
            let result = scanner.scan_tokens();
            black_box(result);
        });
    });
}

criterion_group!(benches, bench_scan_loxscript);
criterion_main!(benches);
