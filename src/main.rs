use dsa_lib::algorithms::{binary_search, heap_sort, quick_sort};
use dsa_lib::structures::avl::AvlTree;
use dsa_lib::structures::disjoint_set::DisjointSet;
use dsa_lib::structures::heap::Heap;
use dsa_lib::structures::queue::Queue;
use dsa_lib::structures::stack::Stack;
use dsa_lib::structures::traits::Container;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("no other logger is installed");

    println!("\n[AvlTree]\n");

    let mut tree: AvlTree<i32> = (1..=7).collect();
    info!("built a tree from 1..=7, height {}", tree.height());
    println!("{:?}", tree);
    println!("inorder:    {:?}", tree.iter().collect::<Vec<_>>());
    println!("preorder:   {:?}", tree.preorder().collect::<Vec<_>>());
    println!("postorder:  {:?}", tree.postorder().collect::<Vec<_>>());
    println!("levelorder: {:?}", tree.levelorder().collect::<Vec<_>>());
    println!("min {:?}, max {:?}", tree.min(), tree.max());

    tree.remove(&4);
    info!("removed the root; balanced: {}", tree.is_balanced());
    println!("{}", tree);

    println!("\n[Stack]\n");

    let mut stack: Stack<&str> = Stack::new();
    for word in ["first", "second", "third"] {
        stack.push(word);
    }
    println!("{}", stack);
    info!("popped {:?}", stack.pop());
    println!("{}", stack);

    println!("\n[Queue]\n");

    let mut queue: Queue<i32> = (1..=5).collect();
    queue.pop();
    queue.push(6);
    info!("front {:?}, back {:?}, cap {}", queue.front(), queue.back(), queue.cap());
    println!("{}", queue);

    println!("\n[Heap]\n");

    let mut heap: Heap<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    info!("heap of {} values, greatest {:?}", heap.len(), heap.peek());
    print!("drained descending:");
    while let Some(value) = heap.pop() {
        print!(" {value}");
    }
    println!();

    println!("\n[DisjointSet]\n");

    let mut sets: DisjointSet<&str> = ["ant", "bee", "cat", "dog"].into_iter().collect();
    sets.union_sets(&"ant", &"bee").expect("both elements exist");
    sets.union_sets(&"cat", &"dog").expect("both elements exist");
    info!("{} elements in {} sets", sets.len(), sets.set_count());
    println!("{}", sets);

    println!("\n[Algorithms]\n");

    let mut values = [9, 2, 7, 1, 8, 4];
    quick_sort(&mut values);
    println!("quick_sort:  {:?}", values);
    println!("heap_sort:   {:?}", heap_sort(vec![5, 3, 8, 1]));
    println!("binary_search for 7: {:?}", binary_search(&values, &7));
}
