use clap::{ArgAction, Parser};
use log::{debug, info, LevelFilter};
use ordered_tree::shuffle::perfect_shuffle;
use ordered_tree::util::Sequence;
use ordered_tree::{Order, Tree};

/// Builds a tree from a shuffled run of numbers, erases one of them and prints what's left.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// How many keys (0..count) to insert
    #[arg(short, long, default_value_t = 10)]
    count: u32,

    /// Seed for the shuffle. Without one, a fresh seed is drawn for every run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Key to erase after inserting everything
    #[arg(short, long, default_value_t = 5)]
    erase: u32,

    /// Traversal order to print: preorder, inorder or postorder
    #[arg(short, long, default_value_t = Order::Inorder)]
    order: Order,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed: {}", seed);

    let mut numbers: Vec<u32> = (0..cli.count).collect();
    perfect_shuffle(&mut numbers, seed);
    println!("{}", Sequence(&numbers));

    let mut tree: Tree<u32> = numbers.into_iter().collect();
    if !tree.erase(&cli.erase) {
        debug!("{} was not in the tree", cli.erase);
    }

    println!("{}", Sequence(&tree.traverse(cli.order)));
    println!("{}", tree.debug_info());
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .init();
}
