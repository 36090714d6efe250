use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use blocklist_core::{BlockList, MemoryBlock};

const LENGTH: usize = 256;

//  Appending, then draining from the front.
//
//  This is the best-case scenario: both operations are O(1).
fn push_back_pop_front(c: &mut Criterion) {
    let blocks = blocks();

    c.bench_function("Push back, pop front", |b| b.iter(|| {
        let mut list = BlockList::<&MemoryBlock>::with_capacity(LENGTH);

        for block in &blocks {
            list.push_back(block);
        }

        while let Some(block) = list.pop_front() {
            black_box(block);
        }
    }));
}

//  Inserting in the middle of the list.
//
//  Each insertion walks half of the list to find its predecessor.
fn insert_at_middle(c: &mut Criterion) {
    let blocks = blocks();

    c.bench_function("Insert at middle", |b| b.iter(|| {
        let mut list = BlockList::<&MemoryBlock>::with_capacity(LENGTH);

        for block in &blocks {
            let middle = list.len() / 2;
            black_box(list.insert_at(middle, block).ok());
        }

        list
    }));
}

//  Removing by identity, as a memory manager does when a block is handed back.
//
//  The blocks are removed from the back, which is the worst-case: the whole list is scanned.
fn remove_block(c: &mut Criterion) {
    let blocks = blocks();

    c.bench_function("Remove block, last first", |b| b.iter_batched(
        || blocks.iter().collect::<BlockList<_>>(),
        |mut list| {
            for block in blocks.iter().rev() {
                black_box(list.remove_block(&block).ok());
            }
        },
        BatchSize::SmallInput,
    ));
}

//  Iterating over the whole list.
fn iterate(c: &mut Criterion) {
    let blocks = blocks();
    let list: BlockList<_> = blocks.iter().collect();

    c.bench_function("Iterate", |b| b.iter(|| {
        list.iter().map(|block| block.length()).sum::<usize>()
    }));
}

fn blocks() -> Vec<MemoryBlock> { (0..LENGTH).map(|i| MemoryBlock::new(i * 64, 64)).collect() }

criterion_group!(benches, push_back_pop_front, insert_at_middle, remove_block, iterate);
criterion_main!(benches);
